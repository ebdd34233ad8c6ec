//! Skill training levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// How far a character has trained a skill.
///
/// The level scales the shared skill base: an untrained skill still receives
/// the base once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    #[default]
    None,
    Trained,
    Mastered,
    Supreme,
}

impl ProficiencyLevel {
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::None,
        ProficiencyLevel::Trained,
        ProficiencyLevel::Mastered,
        ProficiencyLevel::Supreme,
    ];

    /// Get the multiplier applied to the skill base.
    pub const fn multiplier(self) -> i32 {
        match self {
            ProficiencyLevel::None => 1,
            ProficiencyLevel::Trained => 2,
            ProficiencyLevel::Mastered => 3,
            ProficiencyLevel::Supreme => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ProficiencyLevel::None => "none",
            ProficiencyLevel::Trained => "trained",
            ProficiencyLevel::Mastered => "mastered",
            ProficiencyLevel::Supreme => "supreme",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown proficiency level: {}", s)))
    }
}
