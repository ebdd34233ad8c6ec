//! Character import and export.

use std::sync::Arc;

use serde_json::Value;
use soulcore_domain::{CharacterId, CharacterRecord, RangePolicy};
use soulcore_shared::{
    export_character, export_file_name, export_legacy, import_character, ExportFormat,
};

use super::CharacterError;
use crate::entities::Character;

/// A character serialized for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedCharacter {
    pub file_name: String,
    pub document: Value,
}

pub struct CharacterTransfer {
    character: Arc<Character>,
    ranges: RangePolicy,
}

impl CharacterTransfer {
    pub fn new(character: Arc<Character>, ranges: RangePolicy) -> Self {
        Self { character, ranges }
    }

    /// Store an imported document as a new character. Ids in the document
    /// are ignored.
    pub async fn import(&self, raw: &Value) -> Result<CharacterRecord, CharacterError> {
        let sheet = import_character(raw, self.ranges)?;
        let record = self.character.create(sheet).await?;
        tracing::info!(character_id = %record.id, "Imported character");
        Ok(record)
    }

    pub async fn export(
        &self,
        id: CharacterId,
        format: ExportFormat,
    ) -> Result<ExportedCharacter, CharacterError> {
        let record = self
            .character
            .get(id)
            .await?
            .ok_or(CharacterError::NotFound(id))?;

        let document = match format {
            ExportFormat::Canonical => export_character(&record)?,
            ExportFormat::Legacy => serde_json::to_value(export_legacy(&record))?,
        };
        Ok(ExportedCharacter {
            file_name: export_file_name(&record.sheet.name),
            document,
        })
    }
}
