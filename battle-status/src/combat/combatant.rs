//! Combatant records
//!
//! The battle system owns combatants; the status engine only reads their
//! types and health and updates their `status` field.

use serde::{Deserialize, Serialize};

use super::status::{StatusKind, StatusState};

/// Name used in messages when a combatant has none
pub const FALLBACK_NAME: &str = "The combatant";

/// A creature taking part in a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name used in battle messages
    pub name: String,
    /// Current health, never above `max_health`
    pub current_health: u32,
    /// Maximum health
    pub max_health: u32,
    /// Elemental type tags, e.g. "fire" or "steel"
    pub types: Vec<String>,
    /// Active ailment and its counters
    #[serde(default)]
    pub status: StatusState,
}

impl Combatant {
    /// Create a combatant at full health with no ailment
    pub fn new(name: impl Into<String>, max_health: u32) -> Self {
        Self {
            name: name.into(),
            current_health: max_health,
            max_health,
            types: Vec::new(),
            status: StatusState::None,
        }
    }

    /// Add an elemental type tag
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.types.push(type_tag.into());
        self
    }

    /// Replace all elemental type tags
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Name for battle messages, falling back when blank
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            FALLBACK_NAME
        } else {
            name
        }
    }

    /// The active ailment, if any
    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.kind()
    }

    /// Check if the combatant has fainted
    pub fn is_fainted(&self) -> bool {
        self.current_health == 0
    }

    /// Take damage, clamping at zero (returns damage actually taken)
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current_health);
        self.current_health -= actual;
        actual
    }

    /// Heal (cannot exceed max_health, returns amount healed)
    pub fn heal(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.max_health.saturating_sub(self.current_health));
        self.current_health += actual;
        actual
    }
}
