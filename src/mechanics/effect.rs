//! The two interchangeable buffs the rotation juggles.

use std::fmt;

/// Buff duration shared by both effects, in time units.
pub const BUFF_DURATION: i64 = 7;

/// One of the two buff sources. `WrathOfGod` plays the role of effect A,
/// `HeavenlyBlessings` the role of effect B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Effect {
    WrathOfGod,
    HeavenlyBlessings,
}

impl Effect {
    /// Search order: A is always tried before B.
    pub const ALL: [Effect; 2] = [Effect::WrathOfGod, Effect::HeavenlyBlessings];

    /// Short token used in reports.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Effect::WrathOfGod => "WOG",
            Effect::HeavenlyBlessings => "HB",
        }
    }

    #[inline]
    pub fn duration(self) -> i64 {
        match self {
            Effect::WrathOfGod | Effect::HeavenlyBlessings => BUFF_DURATION,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
