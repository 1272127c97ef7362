//! Status ailments
//!
//! A combatant carries at most one ailment at a time:
//! - Poison and burn deal damage at the end of each turn
//! - Paralysis may stop a combatant from acting, and cuts speed
//! - Sleep blocks actions for a fixed number of turns
//! - Freeze blocks actions until a random thaw

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Kinds of status ailment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Poisoned - loses 1/8 of max health each turn
    Poison,
    /// Paralyzed - 25% chance to lose the turn, speed quartered
    Paralysis,
    /// Asleep - cannot act until it wakes up
    Sleep,
    /// Burned - loses 1/16 of max health each turn, attack halved
    Burn,
    /// Frozen - cannot act until it thaws
    Freeze,
}

impl StatusKind {
    /// Get all status kinds
    pub fn all() -> &'static [StatusKind] {
        &[
            StatusKind::Poison,
            StatusKind::Paralysis,
            StatusKind::Sleep,
            StatusKind::Burn,
            StatusKind::Freeze,
        ]
    }

    /// Three-letter badge code shown next to a combatant's name
    pub fn code(&self) -> &'static str {
        match self {
            StatusKind::Poison => "PSN",
            StatusKind::Paralysis => "PAR",
            StatusKind::Sleep => "SLP",
            StatusKind::Burn => "BRN",
            StatusKind::Freeze => "FRZ",
        }
    }
}

impl FromStr for StatusKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poison" | "poisoned" | "psn" => Ok(StatusKind::Poison),
            "paralysis" | "paralyzed" | "par" => Ok(StatusKind::Paralysis),
            "sleep" | "asleep" | "slp" => Ok(StatusKind::Sleep),
            "burn" | "burned" | "brn" => Ok(StatusKind::Burn),
            "freeze" | "frozen" | "frz" => Ok(StatusKind::Freeze),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatusKind::Poison => "poison",
            StatusKind::Paralysis => "paralysis",
            StatusKind::Sleep => "sleep",
            StatusKind::Burn => "burn",
            StatusKind::Freeze => "freeze",
        };
        write!(f, "{}", s)
    }
}

/// The ailment a combatant currently carries, with its counters
///
/// Sleep is the only ailment with per-turn state, so the turn counter and
/// the rolled duration live inside the `Sleeping` variant and vanish with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StatusState {
    /// No ailment
    #[default]
    None,
    Poisoned,
    Paralyzed,
    /// Asleep for `duration` checks; `turns` counts checks already spent
    Sleeping { turns: u32, duration: u32 },
    Burned,
    Frozen,
}

impl StatusState {
    /// Fresh state for a newly applied ailment
    ///
    /// `sleep_duration` is only read for [`StatusKind::Sleep`].
    pub fn onset(kind: StatusKind, sleep_duration: u32) -> Self {
        match kind {
            StatusKind::Poison => StatusState::Poisoned,
            StatusKind::Paralysis => StatusState::Paralyzed,
            StatusKind::Sleep => StatusState::Sleeping {
                turns: 0,
                duration: sleep_duration,
            },
            StatusKind::Burn => StatusState::Burned,
            StatusKind::Freeze => StatusState::Frozen,
        }
    }

    /// The active ailment, if any
    pub fn kind(&self) -> Option<StatusKind> {
        match self {
            StatusState::None => None,
            StatusState::Poisoned => Some(StatusKind::Poison),
            StatusState::Paralyzed => Some(StatusKind::Paralysis),
            StatusState::Sleeping { .. } => Some(StatusKind::Sleep),
            StatusState::Burned => Some(StatusKind::Burn),
            StatusState::Frozen => Some(StatusKind::Freeze),
        }
    }

    /// Check if no ailment is active
    pub fn is_none(&self) -> bool {
        matches!(self, StatusState::None)
    }

    /// Turns elapsed since onset (only tracked while asleep)
    pub fn turns(&self) -> u32 {
        match self {
            StatusState::Sleeping { turns, .. } => *turns,
            _ => 0,
        }
    }

    /// Rolled sleep duration, absent unless asleep
    pub fn sleep_duration(&self) -> Option<u32> {
        match self {
            StatusState::Sleeping { duration, .. } => Some(*duration),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{}", kind),
            None => write!(f, "none"),
        }
    }
}

/// Combat stats a status can scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl Stat {
    /// Get all stats
    pub fn all() -> &'static [Stat] {
        &[
            Stat::Attack,
            Stat::Defense,
            Stat::SpecialAttack,
            Stat::SpecialDefense,
            Stat::Speed,
            Stat::Accuracy,
            Stat::Evasion,
        ]
    }
}

impl FromStr for Stat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attack" | "atk" => Ok(Stat::Attack),
            "defense" | "def" => Ok(Stat::Defense),
            "special_attack" | "sp_attack" | "spatk" => Ok(Stat::SpecialAttack),
            "special_defense" | "sp_defense" | "spdef" => Ok(Stat::SpecialDefense),
            "speed" | "spe" => Ok(Stat::Speed),
            "accuracy" | "acc" => Ok(Stat::Accuracy),
            "evasion" | "eva" => Ok(Stat::Evasion),
            _ => Err(ParseError::UnknownStat(s.to_string())),
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special_attack",
            Stat::SpecialDefense => "special_defense",
            Stat::Speed => "speed",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("poison".parse::<StatusKind>(), Ok(StatusKind::Poison));
        assert_eq!("FROZEN".parse::<StatusKind>(), Ok(StatusKind::Freeze));
        assert_eq!("slp".parse::<StatusKind>(), Ok(StatusKind::Sleep));
        assert_eq!(
            "confused".parse::<StatusKind>(),
            Err(ParseError::UnknownStatus("confused".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for kind in StatusKind::all() {
            assert_eq!(kind.to_string().parse::<StatusKind>(), Ok(*kind));
            assert_eq!(kind.code().parse::<StatusKind>(), Ok(*kind));
        }
        for stat in Stat::all() {
            assert_eq!(stat.to_string().parse::<Stat>(), Ok(*stat));
        }
    }

    #[test]
    fn test_onset_state() {
        assert_eq!(
            StatusState::onset(StatusKind::Sleep, 2),
            StatusState::Sleeping {
                turns: 0,
                duration: 2
            }
        );
        // Duration is ignored for anything but sleep
        assert_eq!(
            StatusState::onset(StatusKind::Burn, 3),
            StatusState::Burned
        );
        for kind in StatusKind::all() {
            assert_eq!(StatusState::onset(*kind, 1).kind(), Some(*kind));
        }
    }

    #[test]
    fn test_counters_only_while_asleep() {
        let none = StatusState::None;
        assert!(none.is_none());
        assert_eq!(none.turns(), 0);
        assert_eq!(none.sleep_duration(), None);

        let frozen = StatusState::Frozen;
        assert_eq!(frozen.turns(), 0);
        assert_eq!(frozen.sleep_duration(), None);

        let asleep = StatusState::Sleeping {
            turns: 1,
            duration: 3,
        };
        assert_eq!(asleep.turns(), 1);
        assert_eq!(asleep.sleep_duration(), Some(3));
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let json = serde_json::to_value(StatusState::Sleeping {
            turns: 0,
            duration: 2,
        })
        .unwrap();
        assert_eq!(json["kind"], "sleeping");
        assert_eq!(json["duration"], 2);

        let json = serde_json::to_value(StatusState::None).unwrap();
        assert_eq!(json["kind"], "none");
    }
}
