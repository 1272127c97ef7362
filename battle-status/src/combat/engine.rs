//! Status engine
//!
//! Drives the ailment state machine for one combatant at a time:
//! - `apply_status` moves None -> ailment, gated by `can_apply_status`
//! - `can_move` runs before the combatant acts each turn
//! - `process_end_turn` runs after actions resolve and reports damage
//! - `remove_status` moves any ailment back to None
//!
//! There is no direct ailment -> ailment transition. The engine never
//! changes a combatant's health; damage is reported for the caller to apply.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::combatant::Combatant;
use super::cure::{check_cure, Cure};
use super::immunity::blocking_type;
use super::roll::{RandomSource, RngSource};
use super::status::{Stat, StatusKind, StatusState};
use crate::config::StatusRules;
use crate::error::CureError;

/// Outcome of the before-action check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCheck {
    /// Whether the combatant's action goes ahead
    pub can_move: bool,
    /// Battle message to show, if any
    pub message: Option<String>,
}

impl MoveCheck {
    fn allowed() -> Self {
        Self {
            can_move: true,
            message: None,
        }
    }

    fn allowed_with(message: String) -> Self {
        Self {
            can_move: true,
            message: Some(message),
        }
    }

    fn blocked(message: String) -> Self {
        Self {
            can_move: false,
            message: Some(message),
        }
    }
}

/// Damage an ailment deals at the end of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndTurnDamage {
    /// Health to subtract, always at least 1
    pub damage: u32,
    pub message: String,
}

/// Status ailment engine
///
/// Holds the rule constants and the random source; all ailment state
/// lives on the combatants passed in.
#[derive(Debug, Clone)]
pub struct StatusEngine<R> {
    rules: StatusRules,
    rng: R,
}

impl<R: RandomSource> StatusEngine<R> {
    /// Create an engine with default rules
    pub fn new(rng: R) -> Self {
        Self::with_rules(StatusRules::default(), rng)
    }

    /// Create an engine with custom rules
    pub fn with_rules(rules: StatusRules, rng: R) -> Self {
        Self { rules, rng }
    }

    /// Get the rules in effect
    pub fn rules(&self) -> &StatusRules {
        &self.rules
    }

    /// Mutable access to the random source
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Check if an ailment could be applied right now
    pub fn can_apply_status(&self, combatant: &Combatant, kind: StatusKind) -> bool {
        combatant.status.is_none() && blocking_type(&combatant.types, kind).is_none()
    }

    /// Apply an ailment; returns false (and changes nothing) when rejected
    pub fn apply_status(&mut self, combatant: &mut Combatant, kind: StatusKind) -> bool {
        if let Some(active) = combatant.status_kind() {
            debug!(
                combatant = %combatant.display_name(),
                status = %kind,
                active = %active,
                "Status rejected: already affected"
            );
            return false;
        }
        if let Some(immune_type) = blocking_type(&combatant.types, kind) {
            debug!(
                combatant = %combatant.display_name(),
                status = %kind,
                immune_type,
                "Status rejected: type immunity"
            );
            return false;
        }

        let duration = match kind {
            StatusKind::Sleep => self
                .rng
                .range_inclusive(self.rules.sleep_min_turns, self.rules.sleep_max_turns),
            _ => 0,
        };
        combatant.status = StatusState::onset(kind, duration);

        debug!(
            combatant = %combatant.display_name(),
            status = %kind,
            sleep_duration = ?combatant.status.sleep_duration(),
            "Status applied"
        );
        true
    }

    /// Clear any ailment and its counters (idempotent)
    pub fn remove_status(&self, combatant: &mut Combatant) {
        if let Some(kind) = combatant.status_kind() {
            debug!(
                combatant = %combatant.display_name(),
                status = %kind,
                "Status removed"
            );
        }
        combatant.status = StatusState::None;
    }

    /// Decide whether the combatant may act this turn
    ///
    /// Must run before the action resolves. A sleep of duration `d` blocks
    /// the first `d` checks and wakes on the next one.
    pub fn can_move(&mut self, combatant: &mut Combatant) -> MoveCheck {
        let name = combatant.display_name().to_string();

        match combatant.status {
            StatusState::None => MoveCheck::allowed(),

            StatusState::Sleeping { turns, duration } => {
                if turns >= duration {
                    self.remove_status(combatant);
                    debug!(combatant = %name, turns, "Woke up");
                    return MoveCheck::allowed_with(format!("{} wakes up!", name));
                }
                combatant.status = StatusState::Sleeping {
                    turns: turns + 1,
                    duration,
                };
                MoveCheck::blocked(format!("{} is fast asleep.", name))
            }

            StatusState::Frozen => {
                if self.rng.chance(self.rules.freeze_thaw_chance) {
                    self.remove_status(combatant);
                    debug!(combatant = %name, "Thawed");
                    return MoveCheck::allowed_with(format!("{} is no longer frozen!", name));
                }
                MoveCheck::blocked(format!("{} is frozen solid!", name))
            }

            StatusState::Paralyzed => {
                if self.rng.chance(self.rules.paralysis_skip_chance) {
                    debug!(combatant = %name, "Fully paralyzed this turn");
                    return MoveCheck::blocked(format!(
                        "{} is paralyzed! It can't move!",
                        name
                    ));
                }
                MoveCheck::allowed()
            }

            // Damage-only ailments never block
            StatusState::Poisoned | StatusState::Burned => MoveCheck::allowed(),
        }
    }

    /// Periodic damage for the end of the turn, if the ailment deals any
    ///
    /// Runs after actions resolve, whether or not the combatant moved.
    /// Never touches health. Damage that floors to 0 (very low max health)
    /// reports nothing.
    pub fn process_end_turn(&self, combatant: &Combatant) -> Option<EndTurnDamage> {
        let name = combatant.display_name();

        let (damage, message) = match combatant.status {
            StatusState::Poisoned => (
                combatant.max_health / self.rules.poison_divisor,
                format!("{} is hurt by poison!", name),
            ),
            StatusState::Burned => (
                combatant.max_health / self.rules.burn_divisor,
                format!("{} is hurt by its burn!", name),
            ),
            _ => return None,
        };
        if damage == 0 {
            return None;
        }

        debug!(
            combatant = %name,
            status = %combatant.status,
            damage,
            "End-of-turn damage"
        );
        Some(EndTurnDamage { damage, message })
    }

    /// Multiplier the active ailment applies to a stat
    pub fn stat_multiplier(&self, combatant: &Combatant, stat: Stat) -> f64 {
        match (combatant.status, stat) {
            (StatusState::Paralyzed, Stat::Speed) => self.rules.paralysis_speed_multiplier,
            (StatusState::Burned, Stat::Attack) => self.rules.burn_attack_multiplier,
            _ => 1.0,
        }
    }

    /// Multiplier by raw stat name; unknown names are unaffected
    pub fn stat_multiplier_by_name(&self, combatant: &Combatant, stat: &str) -> f64 {
        stat.parse::<Stat>()
            .map(|stat| self.stat_multiplier(combatant, stat))
            .unwrap_or(1.0)
    }

    /// Use a cure item; rejection leaves the combatant untouched
    pub fn cure(&self, combatant: &mut Combatant, cure: Cure) -> Result<StatusKind, CureError> {
        let kind = check_cure(combatant, cure)?;
        self.remove_status(combatant);
        Ok(kind)
    }

    /// Full restore: heal to max health and clear any ailment
    ///
    /// Returns the health restored. Fails on a fainted combatant, or when
    /// there is nothing to restore.
    pub fn full_restore(&self, combatant: &mut Combatant) -> Result<u32, CureError> {
        if combatant.is_fainted() {
            return Err(CureError::Fainted);
        }
        if combatant.status.is_none() && combatant.current_health >= combatant.max_health {
            return Err(CureError::NothingToRestore);
        }
        let healed = combatant.heal(combatant.max_health);
        self.remove_status(combatant);
        Ok(healed)
    }
}

impl StatusEngine<RngSource<rand::rngs::ThreadRng>> {
    /// Engine with default rules and the thread-local generator
    pub fn thread() -> Self {
        Self::new(RngSource::thread())
    }
}
