//! In-memory character store.
//!
//! Records live in an id-ordered map behind a `tokio` read/write lock. Writes
//! are last-write-wins; there is no optimistic concurrency.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use soulcore_domain::{CharacterId, CharacterRecord, CharacterSheet};

use super::ports::{CharacterStore, RepoError};

/// First id handed out by an empty store.
pub const FIRST_ID: CharacterId = CharacterId::new(1);

/// Id-ordered records plus the next id to allocate. `next_id` is `None`
/// once the last possible id has been handed out.
#[derive(Debug, Clone)]
pub(crate) struct CharacterTable {
    records: BTreeMap<CharacterId, CharacterRecord>,
    next_id: Option<CharacterId>,
}

impl Default for CharacterTable {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: Some(FIRST_ID),
        }
    }
}

impl CharacterTable {
    /// Rebuild a table from persisted records; allocation resumes after the
    /// highest id seen.
    pub(crate) fn from_records(records: Vec<CharacterRecord>) -> Result<Self, RepoError> {
        let records: BTreeMap<_, _> = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        let next_id = match records.keys().next_back() {
            None => FIRST_ID,
            Some(highest) => highest.next().ok_or_else(|| exhausted(*highest))?,
        };
        Ok(Self {
            records,
            next_id: Some(next_id),
        })
    }

    pub(crate) fn list(&self) -> Vec<CharacterRecord> {
        self.records.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: CharacterId) -> Option<CharacterRecord> {
        self.records.get(&id).cloned()
    }

    pub(crate) fn insert(&mut self, sheet: CharacterSheet) -> Result<CharacterRecord, RepoError> {
        let id = self
            .next_id
            .ok_or_else(|| exhausted(CharacterId::new(u64::MAX)))?;
        self.next_id = id.next();
        let record = CharacterRecord::new(id, sheet);
        self.records.insert(id, record.clone());
        Ok(record)
    }

    pub(crate) fn replace(
        &mut self,
        id: CharacterId,
        sheet: CharacterSheet,
    ) -> Option<CharacterRecord> {
        let slot = self.records.get_mut(&id)?;
        *slot = CharacterRecord::new(id, sheet);
        Some(slot.clone())
    }

    pub(crate) fn remove(&mut self, id: CharacterId) -> bool {
        self.records.remove(&id).is_some()
    }
}

fn exhausted(highest: CharacterId) -> RepoError {
    RepoError::storage("allocate id", format!("no id left after {}", highest))
}

/// Process-local store; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryCharacterStore {
    table: RwLock<CharacterTable>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records.
    pub fn with_records(records: Vec<CharacterRecord>) -> Result<Self, RepoError> {
        Ok(Self {
            table: RwLock::new(CharacterTable::from_records(records)?),
        })
    }
}

#[async_trait]
impl CharacterStore for InMemoryCharacterStore {
    async fn list(&self) -> Result<Vec<CharacterRecord>, RepoError> {
        Ok(self.table.read().await.list())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        Ok(self.table.read().await.get(id))
    }

    async fn create(&self, sheet: CharacterSheet) -> Result<CharacterRecord, RepoError> {
        let record = self.table.write().await.insert(sheet)?;
        tracing::debug!(character_id = %record.id, "Stored character in memory");
        Ok(record)
    }

    async fn update(
        &self,
        id: CharacterId,
        sheet: CharacterSheet,
    ) -> Result<Option<CharacterRecord>, RepoError> {
        Ok(self.table.write().await.replace(id, sheet))
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        Ok(self.table.write().await.remove(id))
    }
}
