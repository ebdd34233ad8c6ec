//! Character entity operations.

use std::sync::Arc;

use soulcore_domain::{CharacterId, CharacterRecord, CharacterSheet};

use crate::infrastructure::ports::{CharacterStore, RepoError};

/// Character entity operations.
///
/// Encapsulates all character record queries and mutations.
pub struct Character {
    store: Arc<dyn CharacterStore>,
}

impl Character {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<CharacterRecord>, RepoError> {
        self.store.list().await
    }

    pub async fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        self.store.get(id).await
    }

    pub async fn create(&self, sheet: CharacterSheet) -> Result<CharacterRecord, RepoError> {
        self.store.create(sheet).await
    }

    pub async fn replace(
        &self,
        id: CharacterId,
        sheet: CharacterSheet,
    ) -> Result<Option<CharacterRecord>, RepoError> {
        self.store.update(id, sheet).await
    }

    pub async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        self.store.delete(id).await
    }
}
