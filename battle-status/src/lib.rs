//! battle-status - status ailment engine for turn-based creature battles
//!
//! Decides which ailment (poison, paralysis, sleep, burn, freeze) a combatant
//! carries, whether it may act each turn, and how much damage the ailment
//! deals at the end of the turn.

pub mod combat;
pub mod config;
pub mod error;
pub mod sim;

pub use combat::{Combatant, MoveCheck, StatusEngine, StatusKind, StatusState};
pub use config::{Config, StatusRules};
