//! Apply damage use case - mitigates a hit and persists the new hit points.

use std::sync::Arc;

use soulcore_domain::{CharacterId, CharacterRecord, SoulCoreSystem};
use soulcore_shared::DamageResponse;

use super::CharacterError;
use crate::entities::Character;

/// Runs one incoming hit through the character's armor, shield and endurance.
///
/// Only `currentHp` changes; it is floored at zero and never reclamped to
/// the maximum. The record is read, hit and written back whole, so a `PUT`
/// landing between the read and the write is overwritten by the pre-hit
/// sheet (last write wins).
pub struct ApplyDamage {
    character: Arc<Character>,
    system: SoulCoreSystem,
}

impl ApplyDamage {
    pub fn new(character: Arc<Character>, system: SoulCoreSystem) -> Self {
        Self { character, system }
    }

    pub async fn execute(
        &self,
        id: CharacterId,
        incoming: i32,
    ) -> Result<DamageResponse, CharacterError> {
        let record = self
            .character
            .get(id)
            .await?
            .ok_or(CharacterError::NotFound(id))?;

        let mut sheet = record.into_sheet();
        let damage = sheet.take_hit(&self.system, incoming);

        tracing::info!(
            character_id = %id,
            incoming,
            total_armor = damage.mitigation.total_armor,
            hp_delta = damage.mitigation.hp_delta,
            current_hp = damage.current_hp,
            "Applied damage"
        );

        if damage.previous_hp == damage.current_hp {
            let character = CharacterRecord::new(id, sheet);
            return Ok(DamageResponse { character, damage });
        }

        let character = self
            .character
            .replace(id, sheet)
            .await?
            .ok_or(CharacterError::NotFound(id))?;
        Ok(DamageResponse { character, damage })
    }
}
