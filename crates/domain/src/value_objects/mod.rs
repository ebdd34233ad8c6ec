//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod dice;
mod equipment;
mod proficiency;
mod rank;
mod rule_system;
mod skill;

pub use attribute::{Attribute, Attributes, ATTRIBUTE_BASELINE, ATTRIBUTE_RANGE};
pub use dice::DiceFormula;
pub use equipment::{EquipmentEntry, Weapon};
pub use proficiency::ProficiencyLevel;
pub use rank::{dice_notation_for, RankTier};
pub use rule_system::{HitPointPolicy, RangePolicy, RuleSystemConfig};
pub use skill::{SkillEntry, SkillName, SkillSet};
