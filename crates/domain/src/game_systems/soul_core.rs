//! The Soul Core rules system.

use crate::value_objects::{HitPointPolicy, ProficiencyLevel, RangePolicy, RuleSystemConfig};

use super::formulas;
use super::mitigation::{self, Defense, Mitigation};
use super::traits::CalculationEngine;

/// Rules system with its version policies fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoulCoreSystem {
    config: RuleSystemConfig,
}

impl SoulCoreSystem {
    pub const fn new(config: RuleSystemConfig) -> Self {
        Self { config }
    }

    pub const fn with_hit_points(policy: HitPointPolicy) -> Self {
        Self::new(RuleSystemConfig::new(policy))
    }

    pub const fn config(&self) -> RuleSystemConfig {
        self.config
    }

    pub const fn hit_point_policy(&self) -> HitPointPolicy {
        self.config.hit_points
    }

    pub const fn range_policy(&self) -> RangePolicy {
        self.config.ranges
    }
}

impl CalculationEngine for SoulCoreSystem {
    fn attribute_bonus(&self, score: i32) -> i32 {
        formulas::attribute_bonus(score)
    }

    fn skill_bonus(
        &self,
        attribute_score: i32,
        skill_base: i32,
        flat_bonus: i32,
        level: ProficiencyLevel,
    ) -> i32 {
        formulas::skill_bonus(attribute_score, skill_base, flat_bonus, level)
    }

    fn max_hp(&self, body: i32, endurance: i32) -> i32 {
        match self.config.hit_points {
            HitPointPolicy::BodyOnly => formulas::max_hp_body_only(body),
            HitPointPolicy::BodyPlusEndurance => {
                formulas::max_hp_body_plus_endurance(body, endurance)
            }
        }
    }

    fn mitigate(&self, incoming: i32, defense: Defense) -> Mitigation {
        mitigation::mitigate(incoming, defense)
    }
}
