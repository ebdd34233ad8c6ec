//! The nine skills and their per-character entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Attribute, ProficiencyLevel};
use crate::DomainError;

/// Every skill on the sheet, grouped three per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillName {
    Strength,
    Agility,
    Endurance,
    Intelligence,
    Wisdom,
    Charisma,
    Willpower,
    Intuition,
    Presence,
}

impl SkillName {
    /// Sheet order: body skills, then mind, then soul.
    pub const ALL: [SkillName; 9] = [
        SkillName::Strength,
        SkillName::Agility,
        SkillName::Endurance,
        SkillName::Intelligence,
        SkillName::Wisdom,
        SkillName::Charisma,
        SkillName::Willpower,
        SkillName::Intuition,
        SkillName::Presence,
    ];

    /// The attribute whose bonus feeds this skill.
    pub const fn attribute(self) -> Attribute {
        match self {
            SkillName::Strength | SkillName::Agility | SkillName::Endurance => Attribute::Body,
            SkillName::Intelligence | SkillName::Wisdom | SkillName::Charisma => Attribute::Mind,
            SkillName::Willpower | SkillName::Intuition | SkillName::Presence => Attribute::Soul,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SkillName::Strength => "strength",
            SkillName::Agility => "agility",
            SkillName::Endurance => "endurance",
            SkillName::Intelligence => "intelligence",
            SkillName::Wisdom => "wisdom",
            SkillName::Charisma => "charisma",
            SkillName::Willpower => "willpower",
            SkillName::Intuition => "intuition",
            SkillName::Presence => "presence",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            SkillName::Strength => "Strength",
            SkillName::Agility => "Agility",
            SkillName::Endurance => "Endurance",
            SkillName::Intelligence => "Intelligence",
            SkillName::Wisdom => "Wisdom",
            SkillName::Charisma => "Charisma",
            SkillName::Willpower => "Willpower",
            SkillName::Intuition => "Intuition",
            SkillName::Presence => "Presence",
        }
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

/// Training and flat bonus for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub proficiency: ProficiencyLevel,
    pub flat_bonus: i32,
}

impl SkillEntry {
    pub const fn new(proficiency: ProficiencyLevel, flat_bonus: i32) -> Self {
        Self {
            proficiency,
            flat_bonus,
        }
    }
}

/// All nine skill entries. Every skill is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillSet {
    pub strength: SkillEntry,
    pub agility: SkillEntry,
    pub endurance: SkillEntry,
    pub intelligence: SkillEntry,
    pub wisdom: SkillEntry,
    pub charisma: SkillEntry,
    pub willpower: SkillEntry,
    pub intuition: SkillEntry,
    pub presence: SkillEntry,
}

impl SkillSet {
    pub const fn get(&self, skill: SkillName) -> &SkillEntry {
        match skill {
            SkillName::Strength => &self.strength,
            SkillName::Agility => &self.agility,
            SkillName::Endurance => &self.endurance,
            SkillName::Intelligence => &self.intelligence,
            SkillName::Wisdom => &self.wisdom,
            SkillName::Charisma => &self.charisma,
            SkillName::Willpower => &self.willpower,
            SkillName::Intuition => &self.intuition,
            SkillName::Presence => &self.presence,
        }
    }

    pub fn get_mut(&mut self, skill: SkillName) -> &mut SkillEntry {
        match skill {
            SkillName::Strength => &mut self.strength,
            SkillName::Agility => &mut self.agility,
            SkillName::Endurance => &mut self.endurance,
            SkillName::Intelligence => &mut self.intelligence,
            SkillName::Wisdom => &mut self.wisdom,
            SkillName::Charisma => &mut self.charisma,
            SkillName::Willpower => &mut self.willpower,
            SkillName::Intuition => &mut self.intuition,
            SkillName::Presence => &mut self.presence,
        }
    }

    /// Entries in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillName, &SkillEntry)> + '_ {
        SkillName::ALL.into_iter().map(move |skill| (skill, self.get(skill)))
    }
}
