//! Elemental type immunities
//!
//! Some elemental types can never contract certain ailments:
//! - Poison and steel types cannot be poisoned
//! - Fire types cannot be burned
//! - Ice types cannot be frozen
//! - Electric types cannot be paralyzed
//!
//! Type tags are matched case-insensitively. French tags from the game data
//! (acier, feu, glace, electrik) are recognized alongside the English ones.

use super::status::StatusKind;

/// Fixed table of type tag -> ailment it blocks
const IMMUNITIES: &[(&str, StatusKind)] = &[
    ("poison", StatusKind::Poison),
    ("steel", StatusKind::Poison),
    ("acier", StatusKind::Poison),
    ("fire", StatusKind::Burn),
    ("feu", StatusKind::Burn),
    ("ice", StatusKind::Freeze),
    ("glace", StatusKind::Freeze),
    ("electric", StatusKind::Paralysis),
    ("electrik", StatusKind::Paralysis),
];

/// Check if a single type tag blocks the given ailment
pub fn type_blocks(type_tag: &str, kind: StatusKind) -> bool {
    let tag = type_tag.trim();
    IMMUNITIES
        .iter()
        .any(|(t, k)| *k == kind && t.eq_ignore_ascii_case(tag))
}

/// Find the first of `types` that blocks the given ailment
pub fn blocking_type<S: AsRef<str>>(types: &[S], kind: StatusKind) -> Option<&str> {
    for t in types {
        let tag: &str = t.as_ref();
        if type_blocks(tag, kind) {
            return Some(tag);
        }
    }
    None
}

/// Get all ailments a set of types is immune to
pub fn immunities<S: AsRef<str>>(types: &[S]) -> Vec<StatusKind> {
    StatusKind::all()
        .iter()
        .copied()
        .filter(|kind| blocking_type(types, *kind).is_some())
        .collect()
}
