//! Reference turn loop
//!
//! Shows how a battle system is expected to call the status engine:
//! check before acting, apply end-of-turn damage afterwards (clamped at
//! zero), and clear the ailment when the combatant faints. Move selection
//! and damage calculation belong to the battle system and are not modeled;
//! a turn only records whether the combatant got to act.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::combat::{Combatant, RandomSource, StatusEngine, StatusState};

/// What happened to one combatant during one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1
    pub turn: u32,
    /// Whether the combatant was allowed to act
    pub acted: bool,
    /// Battle messages, in display order
    pub messages: Vec<String>,
    /// Health actually lost at the end of the turn
    pub damage: u32,
    /// Health after the turn
    pub health: u32,
    /// Ailment after the turn
    pub status: StatusState,
}

/// Every turn of a simulated battle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    pub records: Vec<TurnRecord>,
    /// Turn on which the combatant fainted, if it did
    pub fainted_on_turn: Option<u32>,
}

impl BattleLog {
    /// Number of turns the combatant was allowed to act
    pub fn turns_acted(&self) -> usize {
        self.records.iter().filter(|r| r.acted).count()
    }

    /// Total health lost to ailments
    pub fn total_damage(&self) -> u32 {
        self.records.iter().map(|r| r.damage).sum()
    }
}

/// Drives one combatant through successive turns
#[derive(Debug)]
pub struct TurnLoop<R> {
    engine: StatusEngine<R>,
    turn: u32,
}

impl<R: RandomSource> TurnLoop<R> {
    /// Create a turn loop around an engine
    pub fn new(engine: StatusEngine<R>) -> Self {
        Self { engine, turn: 0 }
    }

    /// The engine, for applying ailments between turns
    pub fn engine(&mut self) -> &mut StatusEngine<R> {
        &mut self.engine
    }

    /// Turns run so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Resolve a single turn
    pub fn run_turn(&mut self, combatant: &mut Combatant) -> TurnRecord {
        self.turn += 1;
        let mut messages = Vec::new();

        let check = self.engine.can_move(combatant);
        messages.extend(check.message);

        let mut damage = 0;
        if let Some(effect) = self.engine.process_end_turn(combatant) {
            damage = combatant.take_damage(effect.damage);
            messages.push(effect.message);
        }

        if combatant.is_fainted() {
            info!(
                combatant = %combatant.display_name(),
                turn = self.turn,
                "Combatant fainted"
            );
            messages.push(format!("{} fainted!", combatant.display_name()));
            self.engine.remove_status(combatant);
        }

        TurnRecord {
            turn: self.turn,
            acted: check.can_move,
            messages,
            damage,
            health: combatant.current_health,
            status: combatant.status,
        }
    }

    /// Run up to `max_turns` turns, stopping early if the combatant faints
    pub fn run(&mut self, combatant: &mut Combatant, max_turns: u32) -> BattleLog {
        let mut log = BattleLog::default();

        for _ in 0..max_turns {
            if combatant.is_fainted() {
                break;
            }
            let record = self.run_turn(combatant);
            if combatant.is_fainted() {
                log.fainted_on_turn = Some(record.turn);
            }
            log.records.push(record);
        }

        info!(
            combatant = %combatant.display_name(),
            turns = log.records.len(),
            damage = log.total_damage(),
            "Simulation finished"
        );
        log
    }
}
