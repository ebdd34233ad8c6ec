//! Legacy flat character document
//!
//! Older sheets stored every field at the top level and repeated the skill
//! base once per skill (`strengthBase`, `agilityBase`, ...). The nine copies
//! must agree on import; export writes the single skill base back into all
//! nine.

use serde::{Deserialize, Serialize};

use soulcore_domain::{
    CharacterSheet, EquipmentEntry, ProficiencyLevel, RankTier, SkillEntry, SkillName, SkillSet,
    Weapon,
};

use crate::validation::ValidationError;

/// Flat on-disk shape of older exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCharacterDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub rank: String,
    pub body: i32,
    pub mind: i32,
    pub soul: i32,
    #[serde(rename = "dicevalue")]
    pub dice_value: String,

    pub strength: ProficiencyLevel,
    pub strength_base: i32,
    pub strength_bonus: i32,
    pub agility: ProficiencyLevel,
    pub agility_base: i32,
    pub agility_bonus: i32,
    pub endurance: ProficiencyLevel,
    pub endurance_base: i32,
    pub endurance_bonus: i32,

    pub intelligence: ProficiencyLevel,
    pub intelligence_base: i32,
    pub intelligence_bonus: i32,
    pub wisdom: ProficiencyLevel,
    pub wisdom_base: i32,
    pub wisdom_bonus: i32,
    pub charisma: ProficiencyLevel,
    pub charisma_base: i32,
    pub charisma_bonus: i32,

    pub willpower: ProficiencyLevel,
    pub willpower_base: i32,
    pub willpower_bonus: i32,
    pub intuition: ProficiencyLevel,
    pub intuition_base: i32,
    pub intuition_bonus: i32,
    pub presence: ProficiencyLevel,
    pub presence_base: i32,
    pub presence_bonus: i32,

    pub armor_name: String,
    pub armor_value: i32,
    pub shield_name: String,
    pub shield_value: i32,
    #[serde(rename = "shieldonoff")]
    pub shield_on: bool,
    pub weapon_name: String,
    pub weapon_damage: i32,

    pub current_hp: i32,
    pub max_hp: i32,
}

impl LegacyCharacterDocument {
    /// Keys that only the flat layout carries.
    pub const MARKER_KEYS: [&'static str; 3] = ["strengthBase", "dicevalue", "shieldonoff"];

    /// `(proficiency, base, flat bonus)` for one skill.
    fn skill(&self, skill: SkillName) -> (ProficiencyLevel, i32, i32) {
        match skill {
            SkillName::Strength => (self.strength, self.strength_base, self.strength_bonus),
            SkillName::Agility => (self.agility, self.agility_base, self.agility_bonus),
            SkillName::Endurance => (self.endurance, self.endurance_base, self.endurance_bonus),
            SkillName::Intelligence => (
                self.intelligence,
                self.intelligence_base,
                self.intelligence_bonus,
            ),
            SkillName::Wisdom => (self.wisdom, self.wisdom_base, self.wisdom_bonus),
            SkillName::Charisma => (self.charisma, self.charisma_base, self.charisma_bonus),
            SkillName::Willpower => (self.willpower, self.willpower_base, self.willpower_bonus),
            SkillName::Intuition => (self.intuition, self.intuition_base, self.intuition_bonus),
            SkillName::Presence => (self.presence, self.presence_base, self.presence_bonus),
        }
    }

    /// The skill base shared by all nine skills.
    pub fn skill_base(&self) -> Result<i32, ValidationError> {
        let base = self.strength_base;
        for skill in SkillName::ALL {
            let (_, other, _) = self.skill(skill);
            if other != base {
                return Err(ValidationError::invalid_value(
                    format!("{}Base", skill.as_str()),
                    format!(
                        "skill bases must all agree (strengthBase is {}, found {})",
                        base, other
                    ),
                ));
            }
        }
        Ok(base)
    }
}

impl TryFrom<LegacyCharacterDocument> for CharacterSheet {
    type Error = ValidationError;

    fn try_from(doc: LegacyCharacterDocument) -> Result<Self, Self::Error> {
        let skill_base = doc.skill_base()?;
        let rank = doc
            .rank
            .parse::<RankTier>()
            .map_err(|err| ValidationError::invalid_value("rank", err.to_string()))?;

        let mut skills = SkillSet::default();
        for skill in SkillName::ALL {
            let (proficiency, _, flat_bonus) = doc.skill(skill);
            *skills.get_mut(skill) = SkillEntry::new(proficiency, flat_bonus);
        }

        Ok(CharacterSheet {
            name: doc.name,
            rank,
            body: doc.body,
            mind: doc.mind,
            soul: doc.soul,
            skill_base,
            skills,
            dice_value: doc.dice_value,
            armor: EquipmentEntry::new(doc.armor_name, doc.armor_value),
            shield: EquipmentEntry::new(doc.shield_name, doc.shield_value),
            shield_active: doc.shield_on,
            weapon: Weapon::new(doc.weapon_name, doc.weapon_damage),
            current_hp: doc.current_hp,
            max_hp: doc.max_hp,
        })
    }
}

impl From<&CharacterSheet> for LegacyCharacterDocument {
    fn from(sheet: &CharacterSheet) -> Self {
        let skills = &sheet.skills;
        let base = sheet.skill_base;
        Self {
            id: None,
            name: sheet.name.clone(),
            rank: sheet.rank.as_str().to_string(),
            body: sheet.body,
            mind: sheet.mind,
            soul: sheet.soul,
            dice_value: sheet.dice_value.clone(),
            strength: skills.strength.proficiency,
            strength_base: base,
            strength_bonus: skills.strength.flat_bonus,
            agility: skills.agility.proficiency,
            agility_base: base,
            agility_bonus: skills.agility.flat_bonus,
            endurance: skills.endurance.proficiency,
            endurance_base: base,
            endurance_bonus: skills.endurance.flat_bonus,
            intelligence: skills.intelligence.proficiency,
            intelligence_base: base,
            intelligence_bonus: skills.intelligence.flat_bonus,
            wisdom: skills.wisdom.proficiency,
            wisdom_base: base,
            wisdom_bonus: skills.wisdom.flat_bonus,
            charisma: skills.charisma.proficiency,
            charisma_base: base,
            charisma_bonus: skills.charisma.flat_bonus,
            willpower: skills.willpower.proficiency,
            willpower_base: base,
            willpower_bonus: skills.willpower.flat_bonus,
            intuition: skills.intuition.proficiency,
            intuition_base: base,
            intuition_bonus: skills.intuition.flat_bonus,
            presence: skills.presence.proficiency,
            presence_base: base,
            presence_bonus: skills.presence.flat_bonus,
            armor_name: sheet.armor.name.clone(),
            armor_value: sheet.armor.value,
            shield_name: sheet.shield.name.clone(),
            shield_value: sheet.shield.value,
            shield_on: sheet.shield_active,
            weapon_name: sheet.weapon.name.clone(),
            weapon_damage: sheet.weapon.damage,
            current_hp: sheet.current_hp,
            max_hp: sheet.max_hp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CharacterSheet {
        CharacterSheet::new("Vey")
            .with_rank(RankTier::Ascendant)
            .with_attributes(13, 9, 15)
            .with_skill_base(3)
            .with_skill(SkillName::Endurance, ProficiencyLevel::Trained, 1)
            .with_skill(SkillName::Presence, ProficiencyLevel::Supreme, -2)
            .with_armor(EquipmentEntry::new("Scale", 6))
            .with_shield(EquipmentEntry::new("Tower", 4), true)
            .with_weapon(Weapon::new("Glaive", 9))
            .with_hp(40, 73)
    }

    #[test]
    fn flat_keys_match_the_old_layout() {
        let json = serde_json::to_value(LegacyCharacterDocument::from(&sample())).unwrap();
        assert_eq!(json["dicevalue"], "1d8");
        assert_eq!(json["shieldonoff"], true);
        assert_eq!(json["presence"], "supreme");
        assert_eq!(json["presenceBonus"], -2);
        assert_eq!(json["armorName"], "Scale");
        assert!(json.get("id").is_none());
        for skill in SkillName::ALL {
            assert_eq!(json[format!("{}Base", skill.as_str())], 3);
        }
    }

    #[test]
    fn converts_back_to_the_same_sheet() {
        let legacy = LegacyCharacterDocument::from(&sample());
        assert_eq!(CharacterSheet::try_from(legacy).unwrap(), sample());
    }

    #[test]
    fn disagreeing_skill_bases_are_rejected() {
        let mut legacy = LegacyCharacterDocument::from(&sample());
        legacy.wisdom_base = 4;
        let err = CharacterSheet::try_from(legacy).unwrap_err();
        assert_eq!(err.path(), Some("wisdomBase"));
    }

    #[test]
    fn unknown_rank_is_rejected() {
        let mut legacy = LegacyCharacterDocument::from(&sample());
        legacy.rank = "Nobody".into();
        assert_eq!(
            CharacterSheet::try_from(legacy).unwrap_err().path(),
            Some("rank")
        );
    }
}
