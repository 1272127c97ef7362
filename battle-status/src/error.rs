//! Error types
//!
//! Status application itself never fails with an error: rejected
//! applications are reported as `false`. These errors cover parsing,
//! item cures, and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::combat::{Cure, StatusKind};

/// Failure to parse a status kind, stat, or cure from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unknown stat: {0}")]
    UnknownStat(String),

    #[error("unknown cure: {0}")]
    UnknownCure(String),
}

/// Reasons a cure item cannot be used on a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CureError {
    #[error("cannot use items on a fainted combatant")]
    Fainted,

    #[error("no status problem to cure")]
    NoStatus,

    #[error("nothing to restore")]
    NothingToRestore,

    #[error("{cure} has no effect on {active}")]
    NoEffect { active: StatusKind, cure: Cure },
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("{field} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    NegativeMultiplier { field: &'static str, value: f64 },

    #[error("sleep range {min}..={max} is empty or starts below 1")]
    InvalidSleepRange { min: u32, max: u32 },

    #[error("{0} must be at least 1")]
    ZeroDivisor(&'static str),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}
