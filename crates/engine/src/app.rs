//! Application state and composition.

use std::sync::Arc;

use soulcore_domain::SoulCoreSystem;

use crate::entities::Character;
use crate::infrastructure::{
    config::{EngineConfig, StoreConfig},
    json_file_store::JsonFileCharacterStore,
    memory_store::InMemoryCharacterStore,
    ports::{CharacterStore, RepoError},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases and the rules system fixed at startup.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub system: SoulCoreSystem,
}

/// Container for all use cases.
pub struct UseCases {
    pub character: use_cases::CharacterUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(store: Arc<dyn CharacterStore>, system: SoulCoreSystem) -> Self {
        let character = Arc::new(Character::new(store));

        Self {
            use_cases: UseCases {
                character: use_cases::CharacterUseCases::new(character, system),
            },
            system,
        }
    }

    /// Build the configured store adapter and wire the app around it.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, RepoError> {
        let store: Arc<dyn CharacterStore> = match &config.store {
            StoreConfig::Memory => {
                tracing::info!("Using in-memory character store");
                Arc::new(InMemoryCharacterStore::new())
            }
            StoreConfig::File(path) => {
                tracing::info!(path = %path.display(), "Using JSON file character store");
                Arc::new(JsonFileCharacterStore::open(path.clone()).await?)
            }
        };
        Ok(Self::new(store, SoulCoreSystem::new(config.rules)))
    }
}
