//! Soul Core domain: character sheets and the rules that derive their numbers.
//!
//! Everything here is pure and synchronous. Storage, HTTP and configuration
//! live in the engine crate.

pub mod aggregates;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;

pub use aggregates::{
    AttributeBonuses, CharacterRecord, CharacterSheet, DamageReport, DerivedSheet, DerivedSkill,
};

pub use game_systems::{
    apply_damage, attribute_bonus, format_signed, hp_percent, mitigate, reduce_hp, skill_bonus,
    ArmorBranch, CalculationEngine, Defense, Mitigation, SoulCoreSystem,
};

pub use ids::CharacterId;

pub use value_objects::{
    dice_notation_for, Attribute, Attributes, DiceFormula, EquipmentEntry,
    HitPointPolicy, ProficiencyLevel, RangePolicy, RankTier, RuleSystemConfig, SkillEntry,
    SkillName, SkillSet, Weapon, ATTRIBUTE_BASELINE, ATTRIBUTE_RANGE,
};
