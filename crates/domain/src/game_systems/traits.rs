//! Calculation trait for sheet mechanics.
//!
//! Callers hold a rules system built once from configuration and ask it for
//! derived values; version choices such as the hit-point formula live inside
//! the implementation and are never passed per call.

use crate::value_objects::ProficiencyLevel;

use super::mitigation::{Defense, Mitigation};

/// Calculation rules of a character sheet.
pub trait CalculationEngine: Send + Sync {
    /// Bonus contributed by a raw attribute score.
    fn attribute_bonus(&self, score: i32) -> i32;

    /// Total bonus of a skill governed by an attribute with the given score.
    fn skill_bonus(
        &self,
        attribute_score: i32,
        skill_base: i32,
        flat_bonus: i32,
        level: ProficiencyLevel,
    ) -> i32;

    /// Maximum hit points. `endurance` is ignored by policies that do not use it.
    fn max_hp(&self, body: i32, endurance: i32) -> i32;

    /// Mitigate a single incoming hit.
    fn mitigate(&self, incoming: i32, defense: Defense) -> Mitigation;
}
