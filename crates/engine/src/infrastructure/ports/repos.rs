//! Storage port for character records.

use async_trait::async_trait;
use soulcore_domain::{CharacterId, CharacterRecord, CharacterSheet};

use super::error::RepoError;

/// Keyed record store. The store owns id assignment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<CharacterRecord>, RepoError>;
    async fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError>;
    async fn create(&self, sheet: CharacterSheet) -> Result<CharacterRecord, RepoError>;
    /// Replace a record wholesale. `None` when the id is unknown.
    async fn update(
        &self,
        id: CharacterId,
        sheet: CharacterSheet,
    ) -> Result<Option<CharacterRecord>, RepoError>;
    /// `false` when the id is unknown.
    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError>;
}
