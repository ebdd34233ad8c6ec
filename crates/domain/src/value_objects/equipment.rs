//! Armor, shield and weapon slots.

use serde::{Deserialize, Serialize};

/// A named armor or shield piece with its protection value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    pub value: i32,
}

impl EquipmentEntry {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}
