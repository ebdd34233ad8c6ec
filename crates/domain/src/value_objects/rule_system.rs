//! Versioned rule policies
//!
//! The hit-point formula changed across revisions of the sheet. Rather than
//! merging the variants, each deployment selects exactly one policy when the
//! rules system is built. Range checking at the record boundary is a separate
//! policy so the arithmetic core stays tolerant of any integer input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Which maximum hit-point formula is in force.
///
/// Serialized as a tagged variant: `{ "version": "bodyOnly" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "version", rename_all = "camelCase")]
pub enum HitPointPolicy {
    /// `body * 5 + 8`
    BodyOnly,
    /// `body * 5 + endurance * 2`
    BodyPlusEndurance,
}

impl HitPointPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            HitPointPolicy::BodyOnly => "bodyOnly",
            HitPointPolicy::BodyPlusEndurance => "bodyPlusEndurance",
        }
    }
}

impl fmt::Display for HitPointPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HitPointPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bodyOnly" => Ok(HitPointPolicy::BodyOnly),
            "bodyPlusEndurance" => Ok(HitPointPolicy::BodyPlusEndurance),
            other => Err(DomainError::parse(format!(
                "Unknown hit point policy '{}' (expected bodyOnly or bodyPlusEndurance)",
                other
            ))),
        }
    }
}

/// How strictly records are range-checked at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Shape only; any integer is accepted.
    #[default]
    Lenient,
    /// Attributes within 1..=20, `0 <= currentHp <= maxHp`, non-negative skill base.
    Strict,
}

impl RangePolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            RangePolicy::Lenient => "lenient",
            RangePolicy::Strict => "strict",
        }
    }
}

impl FromStr for RangePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(RangePolicy::Lenient),
            "strict" => Ok(RangePolicy::Strict),
            other => Err(DomainError::parse(format!("Unknown range policy: {}", other))),
        }
    }
}

/// Configuration of the rules system, fixed for the lifetime of a deployment.
///
/// There is no `Default`: the hit-point policy must be chosen explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSystemConfig {
    pub hit_points: HitPointPolicy,
    #[serde(default)]
    pub ranges: RangePolicy,
}

impl RuleSystemConfig {
    pub const fn new(hit_points: HitPointPolicy) -> Self {
        Self {
            hit_points,
            ranges: RangePolicy::Lenient,
        }
    }

    pub const fn with_ranges(mut self, ranges: RangePolicy) -> Self {
        self.ranges = ranges;
        self
    }
}
