//! Rank tiers and their display dice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DiceFormula;
use crate::DomainError;

/// Narrative progression label of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RankTier {
    #[default]
    Sleeper,
    Awakened,
    Ascendant,
    Transcendent,
    Sovereign,
    Sacred,
    Divine,
}

impl RankTier {
    /// Tiers in ascending order.
    pub const ALL: [RankTier; 7] = [
        RankTier::Sleeper,
        RankTier::Awakened,
        RankTier::Ascendant,
        RankTier::Transcendent,
        RankTier::Sovereign,
        RankTier::Sacred,
        RankTier::Divine,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RankTier::Sleeper => "Sleeper",
            RankTier::Awakened => "Awakened",
            RankTier::Ascendant => "Ascendant",
            RankTier::Transcendent => "Transcendent",
            RankTier::Sovereign => "Sovereign",
            RankTier::Sacred => "Sacred",
            RankTier::Divine => "Divine",
        }
    }

    /// The dice shown next to the rank on the sheet.
    pub const fn dice(self) -> DiceFormula {
        match self {
            RankTier::Sleeper => DiceFormula::single(4),
            RankTier::Awakened => DiceFormula::single(6),
            RankTier::Ascendant => DiceFormula::single(8),
            RankTier::Transcendent => DiceFormula::single(10),
            RankTier::Sovereign => DiceFormula::single(12),
            RankTier::Sacred => DiceFormula::single(20),
            RankTier::Divine => DiceFormula::single(100),
        }
    }

    pub fn dice_notation(self) -> String {
        self.dice().display()
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown rank tier: {}", s)))
    }
}

/// Dice notation for a rank name, or an empty string for an unknown rank.
///
/// Dice are cosmetic, so an unrecognised tier yields the empty sentinel
/// rather than an error.
pub fn dice_notation_for(rank: &str) -> String {
    rank.parse::<RankTier>()
        .map(RankTier::dice_notation)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_fixed() {
        let table: Vec<(&str, String)> = RankTier::ALL
            .iter()
            .map(|rank| (rank.as_str(), rank.dice_notation()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("Sleeper", "1d4".to_string()),
                ("Awakened", "1d6".to_string()),
                ("Ascendant", "1d8".to_string()),
                ("Transcendent", "1d10".to_string()),
                ("Sovereign", "1d12".to_string()),
                ("Sacred", "1d20".to_string()),
                ("Divine", "1d100".to_string()),
            ]
        );
    }

    #[test]
    fn dice_grow_with_rank() {
        let sizes: Vec<u8> = RankTier::ALL.iter().map(|r| r.dice().die_size).collect();
        assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn known_names_resolve() {
        assert_eq!(dice_notation_for("Sovereign"), "1d12");
        assert_eq!(dice_notation_for("Sleeper"), "1d4");
    }

    #[test]
    fn unknown_names_yield_empty_sentinel() {
        assert_eq!(dice_notation_for(""), "");
        assert_eq!(dice_notation_for("sleeper"), "");
        assert_eq!(dice_notation_for("Demigod"), "");
        assert_eq!(dice_notation_for(" Divine"), "");
    }

    #[test]
    fn serializes_with_display_names() {
        let json = serde_json::to_string(&RankTier::Transcendent).unwrap();
        assert_eq!(json, "\"Transcendent\"");
        assert!(serde_json::from_str::<RankTier>("\"Demigod\"").is_err());
    }
}
