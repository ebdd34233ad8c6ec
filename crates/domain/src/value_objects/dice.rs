//! Dice notation shown on a character sheet.
//!
//! Dice strings are display-only; nothing in the rules engine rolls them.

use serde::Serialize;
use std::fmt;

/// A die count and size, rendered as `XdY`.
///
/// Serialized as its notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct DiceFormula {
    pub dice_count: u8,
    pub die_size: u8,
}

impl DiceFormula {
    /// A single die. Used for fixed lookup tables.
    pub(crate) const fn single(die_size: u8) -> Self {
        Self {
            dice_count: 1,
            die_size,
        }
    }

    pub fn display(&self) -> String {
        format!("{}d{}", self.dice_count, self.die_size)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<DiceFormula> for String {
    fn from(value: DiceFormula) -> Self {
        value.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_die_notation() {
        assert_eq!(DiceFormula::single(4).to_string(), "1d4");
        assert_eq!(DiceFormula::single(100).display(), "1d100");
    }

    #[test]
    fn serializes_as_notation() {
        let json = serde_json::to_string(&DiceFormula::single(12)).unwrap();
        assert_eq!(json, "\"1d12\"");
    }
}
