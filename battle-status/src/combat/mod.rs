//! Combat status system
//!
//! Implements the status ailments of creature battles:
//! - Ailment kinds and per-combatant status state
//! - Elemental type immunities
//! - Injectable random rolls
//! - The status engine (apply, per-turn checks, end-of-turn damage)
//! - Item cures

mod combatant;
mod cure;
mod engine;
mod immunity;
mod roll;
mod status;

pub use combatant::{Combatant, FALLBACK_NAME};
pub use cure::{check_cure, Cure};
pub use engine::{EndTurnDamage, MoveCheck, StatusEngine};
pub use immunity::{blocking_type, immunities, type_blocks};
pub use roll::{RandomSource, RngSource, ScriptedRolls};
pub use status::{Stat, StatusKind, StatusState};
