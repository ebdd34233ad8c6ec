//! Response bodies returned by the engine.

use serde::{Deserialize, Serialize};

use soulcore_domain::{
    CharacterRecord, DamageReport, DerivedSheet, ProficiencyLevel, RankTier, RuleSystemConfig,
};

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    /// Field-level detail, e.g. the JSON path that failed validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// A stored character with its derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetResponse {
    pub character: CharacterRecord,
    pub derived: DerivedSheet,
}

/// A character after taking a hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResponse {
    pub character: CharacterRecord,
    pub damage: DamageReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyEntry {
    pub level: ProficiencyLevel,
    pub multiplier: i32,
}

/// Active rules of this deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesResponse {
    #[serde(flatten)]
    pub config: RuleSystemConfig,
    /// Rounding applied to mitigated damage; always `ceiling`.
    pub damage_rounding: String,
    pub proficiency: Vec<ProficiencyEntry>,
}

impl RulesResponse {
    pub const DAMAGE_ROUNDING: &'static str = "ceiling";

    pub fn new(config: RuleSystemConfig) -> Self {
        Self {
            config,
            damage_rounding: Self::DAMAGE_ROUNDING.to_string(),
            proficiency: ProficiencyLevel::ALL
                .into_iter()
                .map(|level| ProficiencyEntry {
                    level,
                    multiplier: level.multiplier(),
                })
                .collect(),
        }
    }
}

/// One row of the rank table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDiceEntry {
    pub rank: RankTier,
    pub dice: String,
}

/// Every rank with its dice, lowest first.
pub fn rank_table() -> Vec<RankDiceEntry> {
    RankTier::ALL
        .into_iter()
        .map(|rank| RankDiceEntry {
            rank,
            dice: rank.dice_notation(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use soulcore_domain::{HitPointPolicy, RangePolicy};

    #[test]
    fn error_body_omits_empty_details() {
        let body = serde_json::to_value(ErrorResponse::new("Character not found")).unwrap();
        assert_eq!(body, json!({ "message": "Character not found" }));

        let body = serde_json::to_value(
            ErrorResponse::new("Invalid character data").with_details("Missing field `name`"),
        )
        .unwrap();
        assert_eq!(body["details"], "Missing field `name`");
    }

    #[test]
    fn rules_response_flattens_config() {
        let config =
            RuleSystemConfig::new(HitPointPolicy::BodyOnly).with_ranges(RangePolicy::Strict);
        let body = serde_json::to_value(RulesResponse::new(config)).unwrap();
        assert_eq!(body["hitPoints"], json!({ "version": "bodyOnly" }));
        assert_eq!(body["ranges"], "strict");
        assert_eq!(body["damageRounding"], "ceiling");
        assert_eq!(body["proficiency"][3], json!({ "level": "supreme", "multiplier": 4 }));
    }

    #[test]
    fn rank_table_lists_all_tiers_in_order() {
        let table = rank_table();
        assert_eq!(table.len(), 7);
        assert_eq!(table[0].dice, "1d4");
        assert_eq!(table[6].rank, RankTier::Divine);
        assert_eq!(table[6].dice, "1d100");
    }
}
