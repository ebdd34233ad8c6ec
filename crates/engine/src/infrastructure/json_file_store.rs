//! JSON file character store.
//!
//! The whole collection is read once at startup and the file is rewritten as
//! a pretty-printed array after every mutation, while the write lock is held.
//! Each mutation is applied to a copy of the table and only becomes visible
//! once that copy is on disk, so a failed write leaves memory unchanged.
//! Writes go straight to the target path; a crash mid-write can truncate it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use soulcore_domain::{CharacterId, CharacterRecord, CharacterSheet};

use super::memory_store::CharacterTable;
use super::ports::{CharacterStore, RepoError};

pub struct JsonFileCharacterStore {
    path: PathBuf,
    table: RwLock<CharacterTable>,
}

impl JsonFileCharacterStore {
    /// Load the store from `path`. A missing or empty file is an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let path = path.into();
        let records = load_records(&path).await?;
        tracing::info!(
            path = %path.display(),
            count = records.len(),
            "Loaded character file"
        );
        Ok(Self {
            path,
            table: RwLock::new(CharacterTable::from_records(records)?),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &CharacterTable) -> Result<(), RepoError> {
        let bytes =
            serde_json::to_vec_pretty(&table.list()).map_err(RepoError::serialization)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| RepoError::storage("persist", e))?;
        tracing::debug!(path = %self.path.display(), "Rewrote character file");
        Ok(())
    }
}

async fn load_records(path: &Path) -> Result<Vec<CharacterRecord>, RepoError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(RepoError::storage("load", e)),
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&bytes).map_err(RepoError::serialization)
}

#[async_trait]
impl CharacterStore for JsonFileCharacterStore {
    async fn list(&self) -> Result<Vec<CharacterRecord>, RepoError> {
        Ok(self.table.read().await.list())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<CharacterRecord>, RepoError> {
        Ok(self.table.read().await.get(id))
    }

    async fn create(&self, sheet: CharacterSheet) -> Result<CharacterRecord, RepoError> {
        let mut table = self.table.write().await;
        let mut staged = table.clone();
        let record = staged.insert(sheet)?;
        self.persist(&staged).await?;
        *table = staged;
        Ok(record)
    }

    async fn update(
        &self,
        id: CharacterId,
        sheet: CharacterSheet,
    ) -> Result<Option<CharacterRecord>, RepoError> {
        let mut table = self.table.write().await;
        let mut staged = table.clone();
        let Some(record) = staged.replace(id, sheet) else {
            return Ok(None);
        };
        self.persist(&staged).await?;
        *table = staged;
        Ok(Some(record))
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        let mut table = self.table.write().await;
        let mut staged = table.clone();
        if !staged.remove(id) {
            return Ok(false);
        }
        self.persist(&staged).await?;
        *table = staged;
        Ok(true)
    }
}
