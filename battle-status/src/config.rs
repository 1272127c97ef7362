//! Configuration
//!
//! Rule constants are layered from built-in defaults, an optional TOML file,
//! and `BATTLE_STATUS_*` environment variables (nested keys split on `__`,
//! e.g. `BATTLE_STATUS_RULES__FREEZE_THAW_CHANCE=0.5`). Once loaded and
//! validated the rules never change.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "BATTLE_STATUS_";

/// Chance per check that a frozen combatant thaws
pub const FREEZE_THAW_CHANCE: f64 = 0.20;
/// Chance per check that paralysis stops the combatant
pub const PARALYSIS_SKIP_CHANCE: f64 = 0.25;
/// Shortest sleep, in blocked checks
pub const SLEEP_MIN_TURNS: u32 = 1;
/// Longest sleep, in blocked checks
pub const SLEEP_MAX_TURNS: u32 = 3;
/// Poison deals max health / this each turn
pub const POISON_DIVISOR: u32 = 8;
/// Burn deals max health / this each turn
pub const BURN_DIVISOR: u32 = 16;
/// Speed multiplier while paralyzed
pub const PARALYSIS_SPEED_MULTIPLIER: f64 = 0.25;
/// Attack multiplier while burned
pub const BURN_ATTACK_MULTIPLIER: f64 = 0.5;

/// Tunable constants of the status rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusRules {
    pub freeze_thaw_chance: f64,
    pub paralysis_skip_chance: f64,
    pub sleep_min_turns: u32,
    pub sleep_max_turns: u32,
    pub poison_divisor: u32,
    pub burn_divisor: u32,
    pub paralysis_speed_multiplier: f64,
    pub burn_attack_multiplier: f64,
}

impl Default for StatusRules {
    fn default() -> Self {
        Self {
            freeze_thaw_chance: FREEZE_THAW_CHANCE,
            paralysis_skip_chance: PARALYSIS_SKIP_CHANCE,
            sleep_min_turns: SLEEP_MIN_TURNS,
            sleep_max_turns: SLEEP_MAX_TURNS,
            poison_divisor: POISON_DIVISOR,
            burn_divisor: BURN_DIVISOR,
            paralysis_speed_multiplier: PARALYSIS_SPEED_MULTIPLIER,
            burn_attack_multiplier: BURN_ATTACK_MULTIPLIER,
        }
    }
}

impl StatusRules {
    /// Check that every constant is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("freeze_thaw_chance", self.freeze_thaw_chance)?;
        check_probability("paralysis_skip_chance", self.paralysis_skip_chance)?;
        check_multiplier("paralysis_speed_multiplier", self.paralysis_speed_multiplier)?;
        check_multiplier("burn_attack_multiplier", self.burn_attack_multiplier)?;

        if self.sleep_min_turns < 1 || self.sleep_min_turns > self.sleep_max_turns {
            return Err(ConfigError::InvalidSleepRange {
                min: self.sleep_min_turns,
                max: self.sleep_max_turns,
            });
        }
        if self.poison_divisor == 0 {
            return Err(ConfigError::ZeroDivisor("poison_divisor"));
        }
        if self.burn_divisor == 0 {
            return Err(ConfigError::ZeroDivisor("burn_divisor"));
        }
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}

fn check_multiplier(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeMultiplier { field, value })
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: StatusRules,
}

impl Config {
    /// Layered providers: defaults, then the TOML file, then the environment
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load and validate configuration
    ///
    /// An explicitly named file must exist; without one only defaults and
    /// the environment apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::MissingFile(PathBuf::from(path)));
            }
        }
        Self::from_figment(Self::figment(path))
    }

    /// Extract and validate from any figment
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.rules.validate()?;
        debug!(rules = ?config.rules, "Loaded status rules");
        Ok(config)
    }
}
