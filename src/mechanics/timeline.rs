//! Persistent, append-only buff timeline.
//!
//! Appending never touches the receiver: the new timeline points back at the
//! old one through an `Rc`, so sibling branches of the search share their
//! common prefix and cannot see each other's tail. Uptime and length are
//! carried along on every append, which keeps both O(1) to read.

use std::fmt;
use std::rc::Rc;

use super::interval::BuffInterval;

#[derive(Debug)]
struct Node {
    interval: BuffInterval,
    prev: Option<Rc<Node>>,
}

#[derive(Clone, Debug, Default)]
pub struct BuffTimeline {
    head: Option<Rc<Node>>,
    len: usize,
    uptime: i64,
}

impl BuffTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// New timeline = `self` followed by `interval`.
    ///
    /// Caller guarantees `interval.starts_at >= self.ends_at()`; debug builds
    /// check it so an overlapping rotation can never be counted twice.
    pub fn append(&self, interval: BuffInterval) -> Self {
        debug_assert!(
            interval.starts_at >= self.ends_at(),
            "{interval} overlaps a timeline ending at {}",
            self.ends_at()
        );
        Self {
            head: Some(Rc::new(Node { interval, prev: self.head.clone() })),
            len: self.len + 1,
            uptime: self.uptime + interval.duration(),
        }
    }

    /// Sum of interval durations; 0 when empty.
    #[inline]
    pub fn uptime(&self) -> i64 {
        self.uptime
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn last(&self) -> Option<&BuffInterval> {
        self.head.as_deref().map(|n| &n.interval)
    }

    /// End of the last interval, or 0 for an empty timeline.
    #[inline]
    pub fn ends_at(&self) -> i64 {
        self.last().map_or(0, |iv| iv.ends_at)
    }

    /// Intervals newest-first; walks the shared chain without copying.
    pub fn iter_rev(&self) -> impl Iterator<Item = &BuffInterval> {
        std::iter::successors(self.head.as_deref(), |n| n.prev.as_deref()).map(|n| &n.interval)
    }

    /// Intervals in chronological order.
    pub fn intervals(&self) -> Vec<BuffInterval> {
        let mut out: Vec<BuffInterval> = self.iter_rev().copied().collect();
        out.reverse();
        out
    }

    /// First `n` intervals in chronological order.
    pub fn preview(&self, n: usize) -> Vec<BuffInterval> {
        let mut out: Vec<BuffInterval> =
            self.iter_rev().skip(self.len.saturating_sub(n)).copied().collect();
        out.reverse();
        out
    }
}

// Unlink the chain iteratively; the default recursive drop would use one
// stack frame per interval on a long rotation.
impl Drop for BuffTimeline {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(rc) = cur {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => cur = node.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Display for BuffTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_intervals(f, &self.intervals())
    }
}

/// `[WOG:[0,7], HB:[7,14]]`
pub(crate) fn write_intervals(f: &mut fmt::Formatter<'_>, intervals: &[BuffInterval]) -> fmt::Result {
    f.write_str("[")?;
    for (i, iv) in intervals.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{iv}")?;
    }
    f.write_str("]")
}
