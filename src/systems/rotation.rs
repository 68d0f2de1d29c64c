// src/systems/rotation.rs

//! # Rotation search
//!
//! Exhaustive depth-first enumeration of every legal way to interleave the
//! two buffs from time 0 up to the horizon.
//!
//! ## Transition rules
//! From a [`SearchState`] exactly one of these shapes applies:
//! - one or both buffs are off cooldown → branch on **each** available buff
//!   (A before B). The interval runs `[now, min(T, now + duration)]` and the
//!   buff's next ready time becomes `now + cooldown` (saturating);
//! - neither buff is ready → a single **wait** that jumps to the earliest
//!   ready time without touching the timeline.
//!
//! Every step strictly advances `now`, so every path reaches the horizon and
//! the walk terminates. A path whose `now >= T` is a leaf: its timeline is
//! handed to the caller's sink and nothing else is ever emitted.
//!
//! ## Traversal
//! Frames live on an explicit LIFO worklist instead of the native stack.
//! Successors are pushed in reverse so leaves come out in the same order a
//! recursive walk would produce them.
//!
//! ## Cost
//! The tree is not pruned; equivalent states reached by different prefixes
//! are explored again. Tree size grows with `T / min(cooldowns, durations)`,
//! so bound the inputs (or cap the sink) before calling.

use std::ops::ControlFlow;

use tracing::debug;

use crate::config::RotationConfig;
use crate::mechanics::{BuffInterval, BuffTimeline, Effect};

/// Clock plus per-buff ready times, threaded through one search path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub now: i64,
    pub wog_ready_at: i64,
    pub hb_ready_at: i64,
}

impl SearchState {
    /// Time 0, both buffs ready.
    pub fn start() -> Self {
        Self { now: 0, wog_ready_at: 0, hb_ready_at: 0 }
    }

    #[inline]
    pub fn ready_at(&self, effect: Effect) -> i64 {
        match effect {
            Effect::WrathOfGod => self.wog_ready_at,
            Effect::HeavenlyBlessings => self.hb_ready_at,
        }
    }

    #[inline]
    pub fn is_available(&self, effect: Effect) -> bool {
        self.ready_at(effect) <= self.now
    }

    /// Earliest instant either buff comes off cooldown.
    #[inline]
    pub fn next_ready(&self) -> i64 {
        self.wog_ready_at.min(self.hb_ready_at)
    }
}

/// A move out of a non-terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Activate(Effect),
    Wait,
}

/// Legal moves from `state`, in exploration order.
pub fn legal_steps(state: &SearchState) -> Vec<Step> {
    let casts: Vec<Step> = Effect::ALL
        .into_iter()
        .filter(|&e| state.is_available(e))
        .map(Step::Activate)
        .collect();
    if casts.is_empty() { vec![Step::Wait] } else { casts }
}

/// Successor frame for `step`. The input timeline is left untouched.
pub fn apply(
    cfg: &RotationConfig,
    state: &SearchState,
    timeline: &BuffTimeline,
    step: Step,
) -> (SearchState, BuffTimeline) {
    let next = match step {
        Step::Activate(effect) => {
            // Saturate: a ready time pinned at i64::MAX means "not again
            // within the horizon".
            let ends_at = cfg.running_time.min(state.now.saturating_add(effect.duration()));
            let ready_at = state.now.saturating_add(cfg.cooldown(effect));
            let next = match effect {
                Effect::WrathOfGod => SearchState { now: ends_at, wog_ready_at: ready_at, ..*state },
                Effect::HeavenlyBlessings => SearchState { now: ends_at, hb_ready_at: ready_at, ..*state },
            };
            (next, timeline.append(BuffInterval::new(effect, state.now, ends_at)))
        }
        Step::Wait => (SearchState { now: state.next_ready(), ..*state }, timeline.clone()),
    };
    debug_assert!(next.0.now > state.now, "search stalled at t={}", state.now);
    next
}

/// Counters from one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames popped off the worklist, leaves included.
    pub frames: usize,
    /// Complete rotations handed to the sink.
    pub leaves: usize,
    /// The sink stopped the walk with frames still pending.
    pub truncated: bool,
}

/// Walk the whole tree, handing each complete rotation to `on_leaf`.
///
/// `cfg` is assumed valid (see [`RotationConfig::validate`]). Returning
/// `ControlFlow::Break` from the sink stops the walk early.
pub fn explore<F>(cfg: &RotationConfig, mut on_leaf: F) -> SearchStats
where
    F: FnMut(BuffTimeline) -> ControlFlow<()>,
{
    debug!(
        wog_cd = cfg.wog_cooldown,
        hb_cd = cfg.hb_cooldown,
        running_time = cfg.running_time,
        "starting rotation search"
    );

    let mut stats = SearchStats::default();
    let mut stack = vec![(SearchState::start(), BuffTimeline::new())];

    while let Some((state, timeline)) = stack.pop() {
        stats.frames += 1;

        if state.now >= cfg.running_time {
            stats.leaves += 1;
            if on_leaf(timeline).is_break() {
                stats.truncated = !stack.is_empty();
                break;
            }
            continue;
        }

        for step in legal_steps(&state).into_iter().rev() {
            stack.push(apply(cfg, &state, &timeline, step));
        }
    }

    debug!(frames = stats.frames, leaves = stats.leaves, truncated = stats.truncated, "rotation search finished");
    stats
}

/// Collected rotations plus walk counters.
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    pub rotations: Vec<BuffTimeline>,
    pub stats: SearchStats,
}

/// Collect every rotation, or the first `max_paths` when a cap is given.
pub fn collect(cfg: &RotationConfig, max_paths: Option<usize>) -> SearchOutcome {
    let mut rotations = Vec::new();
    let stats = explore(cfg, |timeline| {
        rotations.push(timeline);
        match max_paths {
            Some(cap) if rotations.len() >= cap => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    });
    SearchOutcome { rotations, stats }
}
