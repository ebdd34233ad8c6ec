//! The three core attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Score at which an attribute contributes no bonus.
pub const ATTRIBUTE_BASELINE: i32 = 10;

/// Range the input surface offers for attribute scores.
///
/// Formulas accept any integer; only the strict range policy checks this.
pub const ATTRIBUTE_RANGE: std::ops::RangeInclusive<i32> = 1..=20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Body,
    Mind,
    Soul,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Body, Attribute::Mind, Attribute::Soul];

    pub const fn as_str(self) -> &'static str {
        match self {
            Attribute::Body => "body",
            Attribute::Mind => "mind",
            Attribute::Soul => "soul",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown attribute: {}", s)))
    }
}

/// Body, mind and soul scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub body: i32,
    pub mind: i32,
    pub soul: i32,
}

impl Attributes {
    pub const fn new(body: i32, mind: i32, soul: i32) -> Self {
        Self { body, mind, soul }
    }

    pub const fn score(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Body => self.body,
            Attribute::Mind => self.mind,
            Attribute::Soul => self.soul,
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new(ATTRIBUTE_BASELINE, ATTRIBUTE_BASELINE, ATTRIBUTE_BASELINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reads_the_named_attribute() {
        let attributes = Attributes::new(14, 9, 3);
        assert_eq!(attributes.score(Attribute::Body), 14);
        assert_eq!(attributes.score(Attribute::Mind), 9);
        assert_eq!(attributes.score(Attribute::Soul), 3);
    }

    #[test]
    fn defaults_sit_on_the_baseline() {
        assert_eq!(Attributes::default(), Attributes::new(10, 10, 10));
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("soul".parse::<Attribute>(), Ok(Attribute::Soul));
        assert!("Spirit".parse::<Attribute>().is_err());
    }
}
