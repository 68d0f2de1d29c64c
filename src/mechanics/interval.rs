//! A single activation: which buff, and the span it covers.

use std::fmt;

use super::effect::Effect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuffInterval {
    pub label: Effect,
    pub starts_at: i64,
    pub ends_at: i64,
}

impl BuffInterval {
    #[inline]
    pub fn new(label: Effect, starts_at: i64, ends_at: i64) -> Self {
        debug_assert!(starts_at <= ends_at, "interval ends before it starts: [{starts_at},{ends_at}]");
        Self { label, starts_at, ends_at }
    }

    /// Covered time: ends_at - starts_at.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.ends_at - self.starts_at
    }
}

impl fmt::Display for BuffInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[{},{}]", self.label, self.starts_at, self.ends_at)
    }
}
