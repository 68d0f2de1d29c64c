//! Ranking and reporting of finished rotations.
//!
//! Rotations are ordered by uptime, best first. The sort is stable, so equal
//! uptimes keep discovery order; callers should not depend on that.

use std::cmp::Reverse;
use std::fmt;

use crate::mechanics::timeline::write_intervals;
use crate::mechanics::{BuffInterval, BuffTimeline};
use crate::systems::rotation::SearchOutcome;

/// Sort in place by uptime, descending.
pub fn rank(rotations: &mut [BuffTimeline]) {
    rotations.sort_by_key(|t| Reverse(t.uptime()));
}

pub fn best_uptime(rotations: &[BuffTimeline]) -> Option<i64> {
    rotations.iter().map(BuffTimeline::uptime).max()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Keep only the best `top` rotations; `None` keeps all of them.
    pub top: Option<usize>,
    /// Intervals shown per rotation.
    pub preview: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top: None, preview: 10 }
    }
}

/// One line of the report: `1912/3000 [WOG:[0,7], HB:[7,14], ...]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub uptime: i64,
    pub running_time: i64,
    /// Leading intervals only; see `total_intervals` for the full count.
    pub preview: Vec<BuffInterval>,
    pub total_intervals: usize,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ", self.uptime, self.running_time)?;
        write_intervals(f, &self.preview)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationReport {
    pub running_time: i64,
    /// Rotations the search produced, before `top` was applied.
    pub explored: usize,
    /// The path cap cut the search short; the best entry may not be optimal.
    pub truncated: bool,
    pub entries: Vec<ReportEntry>,
}

impl RotationReport {
    pub fn from_outcome(outcome: SearchOutcome, running_time: i64, opts: ReportOptions) -> Self {
        let SearchOutcome { mut rotations, stats } = outcome;
        let explored = rotations.len();
        rank(&mut rotations);

        let keep = opts.top.unwrap_or(explored).min(explored);
        let entries = rotations[..keep]
            .iter()
            .map(|t| ReportEntry {
                uptime: t.uptime(),
                running_time,
                preview: t.preview(opts.preview),
                total_intervals: t.len(),
            })
            .collect();

        Self { running_time, explored, truncated: stats.truncated, entries }
    }

    pub fn best(&self) -> Option<&ReportEntry> {
        self.entries.first()
    }
}

impl fmt::Display for RotationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
