//! Search parameters and boundary limits.

use crate::error::ConfigError;
use crate::mechanics::Effect;

/// The three numeric inputs of a rotation search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationConfig {
    pub wog_cooldown: i64,
    pub hb_cooldown: i64,
    pub running_time: i64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self { wog_cooldown: 17, hb_cooldown: 22, running_time: 3000 }
    }
}

impl RotationConfig {
    pub fn new(wog_cooldown: i64, hb_cooldown: i64, running_time: i64) -> Self {
        Self { wog_cooldown, hb_cooldown, running_time }
    }

    #[inline]
    pub fn cooldown(&self, effect: Effect) -> i64 {
        match effect {
            Effect::WrathOfGod => self.wog_cooldown,
            Effect::HeavenlyBlessings => self.hb_cooldown,
        }
    }

    /// Cooldowns must be >= 1 and the horizon >= 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for effect in Effect::ALL {
            let cooldown = self.cooldown(effect);
            if cooldown < 1 {
                return Err(ConfigError::NonPositiveCooldown { effect, cooldown });
            }
        }
        if self.running_time < 0 {
            return Err(ConfigError::NegativeHorizon(self.running_time));
        }
        Ok(())
    }
}

/// Optional safety cap applied by the caller, never by the branching rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after this many complete rotations. `None` explores everything.
    pub max_paths: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn capped(max_paths: usize) -> Self {
        Self { max_paths: Some(max_paths) }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_paths {
            Some(0) => Err(ConfigError::ZeroPathLimit),
            _ => Ok(()),
        }
    }
}
