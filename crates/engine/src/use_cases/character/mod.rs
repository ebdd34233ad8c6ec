//! Character use cases.
//!
//! Record lifecycle, damage application and import/export, all sharing one
//! store-backed entity and the rules system chosen at startup.

mod damage;
mod error;
mod ops;
mod transfer;

pub use damage::ApplyDamage;
pub use error::CharacterError;
pub use ops::CharacterOps;
pub use transfer::{CharacterTransfer, ExportedCharacter};

use std::sync::Arc;

use soulcore_domain::SoulCoreSystem;

use crate::entities::Character;

/// Container for character use cases.
pub struct CharacterUseCases {
    pub ops: CharacterOps,
    pub damage: ApplyDamage,
    pub transfer: CharacterTransfer,
}

impl CharacterUseCases {
    pub fn new(character: Arc<Character>, system: SoulCoreSystem) -> Self {
        Self {
            ops: CharacterOps::new(character.clone(), system),
            damage: ApplyDamage::new(character.clone(), system),
            transfer: CharacterTransfer::new(character, system.range_policy()),
        }
    }
}
