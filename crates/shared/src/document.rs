//! Character import and export
//!
//! The canonical document is the serialized record itself. Imports also
//! accept the older flat layout, detected by keys only it carries.

use serde_json::Value;

use soulcore_domain::{CharacterRecord, CharacterSheet, RangePolicy};

use crate::legacy::LegacyCharacterDocument;
use crate::validation::{self, Fields, ValidationError};

/// Layout an imported document was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Canonical,
    Legacy,
}

impl DocumentFormat {
    /// Guess the layout of a raw document. Anything that is not clearly the
    /// flat layout is treated as canonical and validated as such.
    pub fn detect(raw: &Value) -> Self {
        let Ok(fields) = Fields::root(raw) else {
            return DocumentFormat::Canonical;
        };
        if !fields.has("skills")
            && LegacyCharacterDocument::MARKER_KEYS
                .iter()
                .any(|key| fields.has(key))
        {
            DocumentFormat::Legacy
        } else {
            DocumentFormat::Canonical
        }
    }
}

/// Canonical export of a stored character.
pub fn export_character(record: &CharacterRecord) -> Result<Value, serde_json::Error> {
    serde_json::to_value(record)
}

/// Flat export for tools that still read the old layout.
pub fn export_legacy(record: &CharacterRecord) -> LegacyCharacterDocument {
    LegacyCharacterDocument {
        id: Some(record.id.get()),
        ..LegacyCharacterDocument::from(&record.sheet)
    }
}

/// Parse an imported document in either layout. Any `id` is dropped; the
/// store assigns a fresh one.
pub fn import_character(raw: &Value, policy: RangePolicy) -> Result<CharacterSheet, ValidationError> {
    let sheet = match DocumentFormat::detect(raw) {
        DocumentFormat::Canonical => validation::validate(raw)?,
        DocumentFormat::Legacy => {
            let doc: LegacyCharacterDocument = serde_json::from_value(raw.clone())?;
            CharacterSheet::try_from(doc)?
        }
    };
    sheet.check_ranges(policy)?;
    Ok(sheet)
}

/// Download file name for an export: the character name plus `.json`.
///
/// Characters that would break a `Content-Disposition` header or a path,
/// and anything outside ASCII, are replaced with `_`.
pub fn export_file_name(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' | ':' | '*' | '?' | '<' | '>' | '|' => '_',
            c if c.is_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        "character.json".to_string()
    } else {
        format!("{}.json", stem)
    }
}
