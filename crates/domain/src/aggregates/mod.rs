//! Aggregate roots - domain objects that own their related data
//!
//! A character owns its attributes, skills and equipment outright; derived
//! values are recomputed from it on demand and never stored.

pub mod character;

pub use character::{
    AttributeBonuses, CharacterRecord, CharacterSheet, DamageReport, DerivedSheet, DerivedSkill,
    DEFAULT_HP, DEFAULT_SKILL_BASE,
};
