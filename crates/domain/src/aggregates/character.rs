//! Character aggregate
//!
//! `CharacterSheet` is everything a player edits; `CharacterRecord` is a sheet
//! that the store has assigned an identity to. The skill base is a single
//! value shared by all nine skills.

use serde::{Deserialize, Serialize};

use crate::game_systems::{hp_percent, CalculationEngine, Defense, Mitigation};
use crate::ids::CharacterId;
use crate::value_objects::{
    Attribute, Attributes, EquipmentEntry, ProficiencyLevel, RangePolicy, RankTier, SkillName,
    SkillSet, Weapon, ATTRIBUTE_RANGE,
};
use crate::DomainError;

/// Default skill base of a fresh sheet.
pub const DEFAULT_SKILL_BASE: i32 = 1;
/// Hit points a fresh sheet starts with.
pub const DEFAULT_HP: i32 = 50;

/// Editable contents of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub name: String,
    pub rank: RankTier,
    pub body: i32,
    pub mind: i32,
    pub soul: i32,
    /// Shared base applied to every skill, scaled by proficiency.
    pub skill_base: i32,
    pub skills: SkillSet,
    /// Display dice; normally the rank's dice.
    pub dice_value: String,
    pub armor: EquipmentEntry,
    pub shield: EquipmentEntry,
    pub shield_active: bool,
    pub weapon: Weapon,
    pub current_hp: i32,
    pub max_hp: i32,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        let rank = RankTier::default();
        let attributes = Attributes::default();
        Self {
            name: String::new(),
            rank,
            body: attributes.body,
            mind: attributes.mind,
            soul: attributes.soul,
            skill_base: DEFAULT_SKILL_BASE,
            skills: SkillSet::default(),
            dice_value: rank.dice_notation(),
            armor: EquipmentEntry::default(),
            shield: EquipmentEntry::default(),
            shield_active: false,
            weapon: Weapon::default(),
            current_hp: DEFAULT_HP,
            max_hp: DEFAULT_HP,
        }
    }
}

impl CharacterSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the rank and show its dice.
    pub fn with_rank(mut self, rank: RankTier) -> Self {
        self.rank = rank;
        self.dice_value = rank.dice_notation();
        self
    }

    pub fn with_attributes(mut self, body: i32, mind: i32, soul: i32) -> Self {
        self.body = body;
        self.mind = mind;
        self.soul = soul;
        self
    }

    pub fn with_skill_base(mut self, skill_base: i32) -> Self {
        self.skill_base = skill_base;
        self
    }

    pub fn with_skill(mut self, skill: SkillName, level: ProficiencyLevel, flat_bonus: i32) -> Self {
        let entry = self.skills.get_mut(skill);
        entry.proficiency = level;
        entry.flat_bonus = flat_bonus;
        self
    }

    pub fn with_armor(mut self, armor: EquipmentEntry) -> Self {
        self.armor = armor;
        self
    }

    pub fn with_shield(mut self, shield: EquipmentEntry, active: bool) -> Self {
        self.shield = shield;
        self.shield_active = active;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = weapon;
        self
    }

    pub fn with_hp(mut self, current_hp: i32, max_hp: i32) -> Self {
        self.current_hp = current_hp;
        self.max_hp = max_hp;
        self
    }

    pub const fn attributes(&self) -> Attributes {
        Attributes::new(self.body, self.mind, self.soul)
    }

    pub fn skill_bonus(&self, engine: &dyn CalculationEngine, skill: SkillName) -> i32 {
        let entry = self.skills.get(skill);
        engine.skill_bonus(
            self.attributes().score(skill.attribute()),
            self.skill_base,
            entry.flat_bonus,
            entry.proficiency,
        )
    }

    /// Endurance bonus used for mitigation and endurance-based hit points.
    ///
    /// Body bonus plus the skill base scaled by endurance training; the
    /// endurance flat bonus does not count.
    pub fn endurance_rating(&self, engine: &dyn CalculationEngine) -> i32 {
        engine.skill_bonus(
            self.body,
            self.skill_base,
            0,
            self.skills.endurance.proficiency,
        )
    }

    pub fn defense(&self, engine: &dyn CalculationEngine) -> Defense {
        Defense::new(
            self.armor.value,
            self.shield.value,
            self.shield_active,
            self.endurance_rating(engine),
        )
    }

    /// Maximum hit points under the engine's policy.
    pub fn computed_max_hp(&self, engine: &dyn CalculationEngine) -> i32 {
        engine.max_hp(self.body, self.endurance_rating(engine))
    }

    /// Every derived value shown on the sheet.
    pub fn derive(&self, engine: &dyn CalculationEngine) -> DerivedSheet {
        let attributes = self.attributes();
        let skills = SkillName::ALL
            .into_iter()
            .map(|skill| {
                let entry = self.skills.get(skill);
                let bonus = self.skill_bonus(engine, skill);
                DerivedSkill {
                    skill,
                    attribute: skill.attribute(),
                    proficiency: entry.proficiency,
                    multiplier: entry.proficiency.multiplier(),
                    bonus,
                    display: crate::game_systems::format_signed(bonus),
                }
            })
            .collect();

        DerivedSheet {
            attribute_bonuses: AttributeBonuses {
                body: engine.attribute_bonus(attributes.body),
                mind: engine.attribute_bonus(attributes.mind),
                soul: engine.attribute_bonus(attributes.soul),
            },
            skills,
            endurance_rating: self.endurance_rating(engine),
            total_armor: self.defense(engine).total_armor(),
            computed_max_hp: self.computed_max_hp(engine),
            current_hp: self.current_hp,
            max_hp: self.max_hp,
            hp_percent: hp_percent(self.current_hp, self.max_hp),
            rank_dice: self.rank.dice_notation(),
        }
    }

    /// Mitigate a hit and subtract it from current hit points.
    pub fn take_hit(&mut self, engine: &dyn CalculationEngine, incoming: i32) -> DamageReport {
        let mitigation = engine.mitigate(incoming, self.defense(engine));
        let previous_hp = self.current_hp;
        self.current_hp = crate::game_systems::reduce_hp(previous_hp, mitigation.hp_delta);
        DamageReport {
            mitigation,
            previous_hp,
            current_hp: self.current_hp,
        }
    }

    /// Boundary range checks; `Lenient` accepts everything.
    pub fn check_ranges(&self, policy: RangePolicy) -> Result<(), DomainError> {
        if policy == RangePolicy::Lenient {
            return Ok(());
        }

        let attributes = self.attributes();
        for attribute in Attribute::ALL {
            let score = attributes.score(attribute);
            if !ATTRIBUTE_RANGE.contains(&score) {
                return Err(DomainError::validation(format!(
                    "{} must be within {}..={}, got {}",
                    attribute,
                    ATTRIBUTE_RANGE.start(),
                    ATTRIBUTE_RANGE.end(),
                    score
                )));
            }
        }
        if self.skill_base < 0 {
            return Err(DomainError::validation(format!(
                "skillBase must not be negative, got {}",
                self.skill_base
            )));
        }
        if self.current_hp < 0 || self.current_hp > self.max_hp {
            return Err(DomainError::validation(format!(
                "currentHp must be within 0..={}, got {}",
                self.max_hp, self.current_hp
            )));
        }
        Ok(())
    }
}

/// A sheet with its store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    #[serde(flatten)]
    pub sheet: CharacterSheet,
}

impl CharacterRecord {
    pub fn new(id: CharacterId, sheet: CharacterSheet) -> Self {
        Self { id, sheet }
    }

    pub fn into_sheet(self) -> CharacterSheet {
        self.sheet
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBonuses {
    pub body: i32,
    pub mind: i32,
    pub soul: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSkill {
    pub skill: SkillName,
    pub attribute: Attribute,
    pub proficiency: ProficiencyLevel,
    pub multiplier: i32,
    pub bonus: i32,
    /// Signed display form, e.g. `+3`.
    pub display: String,
}

/// Live totals for a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSheet {
    pub attribute_bonuses: AttributeBonuses,
    pub skills: Vec<DerivedSkill>,
    pub endurance_rating: i32,
    pub total_armor: i32,
    /// Maximum hit points the configured formula gives.
    pub computed_max_hp: i32,
    pub current_hp: i32,
    /// Stored maximum, which the player may have edited.
    pub max_hp: i32,
    pub hp_percent: u8,
    pub rank_dice: String,
}

impl DerivedSheet {
    pub fn skill(&self, skill: SkillName) -> Option<&DerivedSkill> {
        self.skills.iter().find(|derived| derived.skill == skill)
    }
}

/// Result of applying one hit to a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageReport {
    pub mitigation: Mitigation,
    pub previous_hp: i32,
    pub current_hp: i32,
}
