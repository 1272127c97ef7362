//! Shared helpers for status engine integration tests

use battle_status::combat::{Combatant, RngSource, ScriptedRolls, StatusEngine};
use battle_status::sim::TurnLoop;

/// Sample that fails every thaw and paralysis check
pub const NEVER: f64 = 0.99;

/// Sample that passes every thaw and paralysis check
pub const ALWAYS: f64 = 0.0;

/// Engine whose rolls always return `sample`
pub fn scripted(sample: f64) -> StatusEngine<ScriptedRolls> {
    StatusEngine::new(ScriptedRolls::constant(sample))
}

/// Turn loop with a seeded generator
pub fn seeded_loop(seed: u64) -> TurnLoop<RngSource<rand::rngs::StdRng>> {
    TurnLoop::new(StatusEngine::new(RngSource::seeded(seed)))
}

/// A plain combatant with the given types
pub fn combatant(name: &str, max_health: u32, types: &[&str]) -> Combatant {
    Combatant::new(name, max_health).with_types(types.iter().copied())
}
