//! Record validation
//!
//! Shape-checks raw JSON into a `CharacterSheet`. Every field must be present
//! with the right primitive type; unknown keys (including a client-supplied
//! `id`) are ignored. Numeric ranges are only checked when the strict range
//! policy is in force.

use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use soulcore_domain::{
    CharacterSheet, DomainError, EquipmentEntry, RangePolicy, RankTier, SkillEntry, SkillName,
    SkillSet, Weapon,
};

/// Why a raw character document was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Character data must be a JSON object")]
    NotAnObject,

    #[error("Missing field `{0}`")]
    MissingField(String),

    #[error("Field `{path}` must be {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
    },

    #[error("Field `{path}`: {message}")]
    InvalidValue { path: String, message: String },

    #[error("{0}")]
    OutOfRange(String),

    #[error("Malformed document: {0}")]
    Malformed(String),
}

impl ValidationError {
    pub fn invalid_value(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            path: path.into(),
            message: message.into(),
        }
    }

    /// JSON path of the offending field, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingField(path)
            | Self::WrongType { path, .. }
            | Self::InvalidValue { path, .. } => Some(path),
            Self::NotAnObject | Self::OutOfRange(_) | Self::Malformed(_) => None,
        }
    }
}

impl From<DomainError> for ValidationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::OutOfRange(msg),
            other => Self::Malformed(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Shape-check a raw document.
pub fn validate(raw: &Value) -> Result<CharacterSheet, ValidationError> {
    let root = Fields::root(raw)?;

    let armor = root.object("armor")?;
    let shield = root.object("shield")?;
    let weapon = root.object("weapon")?;

    Ok(CharacterSheet {
        name: root.string("name")?,
        rank: root.parsed::<RankTier>("rank")?,
        body: root.int("body")?,
        mind: root.int("mind")?,
        soul: root.int("soul")?,
        skill_base: root.int("skillBase")?,
        skills: read_skills(&root.object("skills")?)?,
        dice_value: root.string("diceValue")?,
        armor: EquipmentEntry::new(armor.string("name")?, armor.int("value")?),
        shield: EquipmentEntry::new(shield.string("name")?, shield.int("value")?),
        shield_active: root.boolean("shieldActive")?,
        weapon: Weapon::new(weapon.string("name")?, weapon.int("damage")?),
        current_hp: root.int("currentHp")?,
        max_hp: root.int("maxHp")?,
    })
}

/// Shape-check, then apply the configured range policy.
pub fn validate_with_policy(
    raw: &Value,
    policy: RangePolicy,
) -> Result<CharacterSheet, ValidationError> {
    let sheet = validate(raw)?;
    sheet.check_ranges(policy)?;
    Ok(sheet)
}

fn read_skills(skills: &Fields<'_>) -> Result<SkillSet, ValidationError> {
    let mut set = SkillSet::default();
    for skill in SkillName::ALL {
        let entry = skills.object(skill.as_str())?;
        *set.get_mut(skill) = SkillEntry::new(entry.parsed("proficiency")?, entry.int("flatBonus")?);
    }
    Ok(set)
}

/// A JSON object together with its path from the document root.
pub(crate) struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn root(raw: &'a Value) -> Result<Self, ValidationError> {
        raw.as_object()
            .map(|map| Self {
                path: String::new(),
                map,
            })
            .ok_or(ValidationError::NotAnObject)
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub(crate) fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<&'a Value, ValidationError> {
        self.map
            .get(key)
            .ok_or_else(|| ValidationError::MissingField(self.path_of(key)))
    }

    fn wrong_type(&self, key: &str, expected: &'static str) -> ValidationError {
        ValidationError::WrongType {
            path: self.path_of(key),
            expected,
        }
    }

    pub(crate) fn object(&self, key: &str) -> Result<Fields<'a>, ValidationError> {
        let map = self
            .get(key)?
            .as_object()
            .ok_or_else(|| self.wrong_type(key, "an object"))?;
        Ok(Fields {
            path: self.path_of(key),
            map,
        })
    }

    pub(crate) fn string(&self, key: &str) -> Result<String, ValidationError> {
        self.get(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.wrong_type(key, "a string"))
    }

    pub(crate) fn int(&self, key: &str) -> Result<i32, ValidationError> {
        self.get(key)?
            .as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .ok_or_else(|| self.wrong_type(key, "a 32-bit integer"))
    }

    pub(crate) fn boolean(&self, key: &str) -> Result<bool, ValidationError> {
        self.get(key)?
            .as_bool()
            .ok_or_else(|| self.wrong_type(key, "a boolean"))
    }

    /// A string field parsed into a closed vocabulary.
    pub(crate) fn parsed<T>(&self, key: &str) -> Result<T, ValidationError>
    where
        T: FromStr<Err = DomainError>,
    {
        let raw = self.string(key)?;
        raw.parse::<T>()
            .map_err(|err| ValidationError::invalid_value(self.path_of(key), err.to_string()))
    }
}
