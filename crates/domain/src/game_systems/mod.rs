//! Rules systems and their formulas.
//!
//! - `formulas` - pure attribute, skill and hit-point arithmetic
//! - `mitigation` - armor/shield/endurance damage reduction
//! - `traits` - the `CalculationEngine` seam
//! - `soul_core` - the configured rules system

pub mod formulas;
pub mod mitigation;
mod soul_core;
mod traits;

pub use formulas::{
    attribute_bonus, format_signed, hp_percent, max_hp_body_only, max_hp_body_plus_endurance,
    skill_bonus,
};
pub use mitigation::{apply_damage, mitigate, reduce_hp, ArmorBranch, Defense, Mitigation};
pub use soul_core::SoulCoreSystem;
pub use traits::CalculationEngine;
