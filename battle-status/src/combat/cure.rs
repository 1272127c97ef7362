//! Status cures
//!
//! Items cure ailments in two ways: a targeted cure (an antidote only
//! works on poison) or a full cure that removes any ailment.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::combatant::Combatant;
use super::status::StatusKind;
use crate::error::{CureError, ParseError};

/// What an item is able to cure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cure {
    /// Cures a single ailment
    Only(StatusKind),
    /// Cures whatever ailment is active
    Any,
}

impl Cure {
    /// Check if this cure works on the given ailment
    pub fn covers(&self, kind: StatusKind) -> bool {
        match self {
            Cure::Only(target) => *target == kind,
            Cure::Any => true,
        }
    }
}

impl FromStr for Cure {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" | "full" => Ok(Cure::Any),
            other => other
                .parse::<StatusKind>()
                .map(Cure::Only)
                .map_err(|_| ParseError::UnknownCure(s.to_string())),
        }
    }
}

impl std::fmt::Display for Cure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cure::Only(kind) => write!(f, "{} cure", kind),
            Cure::Any => write!(f, "full cure"),
        }
    }
}

/// Check whether a cure would work, returning the ailment it would remove
///
/// Items cannot be used on a fainted combatant.
pub fn check_cure(combatant: &Combatant, cure: Cure) -> Result<StatusKind, CureError> {
    if combatant.is_fainted() {
        return Err(CureError::Fainted);
    }
    let active = combatant.status_kind().ok_or(CureError::NoStatus)?;
    if !cure.covers(active) {
        return Err(CureError::NoEffect { active, cure });
    }
    Ok(active)
}
