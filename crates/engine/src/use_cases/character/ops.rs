//! Character CRUD and derived sheets.

use std::sync::Arc;

use serde_json::Value;
use soulcore_domain::{CharacterId, CharacterRecord, SoulCoreSystem};
use soulcore_shared::{validate_with_policy, SheetResponse};

use super::CharacterError;
use crate::entities::Character;

/// Record lifecycle operations. Every write is validated against the
/// configured range policy before it reaches the store.
pub struct CharacterOps {
    character: Arc<Character>,
    system: SoulCoreSystem,
}

impl CharacterOps {
    pub fn new(character: Arc<Character>, system: SoulCoreSystem) -> Self {
        Self { character, system }
    }

    pub async fn list(&self) -> Result<Vec<CharacterRecord>, CharacterError> {
        Ok(self.character.list().await?)
    }

    pub async fn get(&self, id: CharacterId) -> Result<CharacterRecord, CharacterError> {
        self.character
            .get(id)
            .await?
            .ok_or(CharacterError::NotFound(id))
    }

    pub async fn create(&self, raw: &Value) -> Result<CharacterRecord, CharacterError> {
        let sheet = validate_with_policy(raw, self.system.range_policy())?;
        let record = self.character.create(sheet).await?;
        tracing::info!(
            character_id = %record.id,
            name = %record.sheet.name,
            "Created character"
        );
        Ok(record)
    }

    /// Replace a record. Validation runs before the lookup, so a bad body is
    /// reported even for an unknown id.
    pub async fn update(
        &self,
        id: CharacterId,
        raw: &Value,
    ) -> Result<CharacterRecord, CharacterError> {
        let sheet = validate_with_policy(raw, self.system.range_policy())?;
        let record = self
            .character
            .replace(id, sheet)
            .await?
            .ok_or(CharacterError::NotFound(id))?;
        tracing::info!(character_id = %id, "Updated character");
        Ok(record)
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), CharacterError> {
        if !self.character.delete(id).await? {
            return Err(CharacterError::NotFound(id));
        }
        tracing::info!(character_id = %id, "Deleted character");
        Ok(())
    }

    /// A stored record with every derived value computed under the active rules.
    pub async fn sheet(&self, id: CharacterId) -> Result<SheetResponse, CharacterError> {
        let character = self.get(id).await?;
        let derived = character.sheet.derive(&self.system);
        Ok(SheetResponse { character, derived })
    }
}
