//! Configuration errors, raised before any search work begins.

use thiserror::Error;

use crate::mechanics::Effect;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero or negative cooldown would let the search stall.
    #[error("cooldown for {effect} must be at least 1, got {cooldown}")]
    NonPositiveCooldown { effect: Effect, cooldown: i64 },

    #[error("running time must not be negative, got {0}")]
    NegativeHorizon(i64),

    /// A path cap of zero could never report a rotation.
    #[error("max paths must be at least 1")]
    ZeroPathLimit,
}
