// In memory implementation of the InteractionStore port.
//
// Responsibilities
// - Keep interactions in a map keyed by (user, recipe, kind).
// - Check and insert under one write guard so concurrent adds of the same
//   triple cannot both succeed.
// - Remember purged recipes under that same guard, so an add racing a recipe
//   deletion either lands before the purge or is refused after it.

use crate::modules::interactions::core::interaction::{Interaction, InteractionKind};
use crate::modules::interactions::core::ports::{InteractionStore, InteractionStoreError};
use crate::shared::core::primitives::{RecipeId, UserId};
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Duration;
use tokio::sync::RwLock;

type Key = (UserId, RecipeId, InteractionKind);

#[derive(Default)]
struct Records {
    interactions: HashMap<Key, Interaction>,
    retired: HashSet<RecipeId>,
}

#[derive(Default)]
pub struct InMemoryInteractionStore {
    records: RwLock<Records>,
    is_offline: bool,
    delay_add: Option<Duration>,
}

impl InMemoryInteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Widen the window between reading and writing inside `add`.
    pub fn set_delay_add_ms(&mut self, ms: u64) {
        self.delay_add = Some(Duration::from_millis(ms));
    }

    fn ensure_online(&self) -> Result<(), InteractionStoreError> {
        if self.is_offline {
            return Err(InteractionStoreError::Backend(
                "Interaction store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn exists(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        kind: InteractionKind,
    ) -> Result<bool, InteractionStoreError> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .interactions
            .contains_key(&(user_id, recipe_id, kind)))
    }

    async fn add(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        kind: InteractionKind,
    ) -> Result<Interaction, InteractionStoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        if let Some(delay) = self.delay_add {
            tokio::time::sleep(delay).await;
        }
        if guard.retired.contains(&recipe_id) {
            return Err(InteractionStoreError::RecipeRetired(recipe_id));
        }
        match guard.interactions.entry((user_id, recipe_id, kind)) {
            Entry::Occupied(_) => Err(InteractionStoreError::Conflict {
                user_id,
                recipe_id,
                kind,
            }),
            Entry::Vacant(slot) => {
                let interaction = Interaction {
                    user_id,
                    recipe_id,
                    kind,
                    created_at: Utc::now().timestamp_millis(),
                };
                slot.insert(interaction.clone());
                Ok(interaction)
            }
        }
    }

    async fn remove(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        kind: InteractionKind,
    ) -> Result<bool, InteractionStoreError> {
        self.ensure_online()?;
        Ok(self
            .records
            .write()
            .await
            .interactions
            .remove(&(user_id, recipe_id, kind))
            .is_some())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        kind: InteractionKind,
    ) -> Result<BTreeSet<RecipeId>, InteractionStoreError> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .interactions
            .keys()
            .filter(|(uid, _, k)| *uid == user_id && *k == kind)
            .map(|(_, recipe_id, _)| *recipe_id)
            .collect())
    }

    async fn purge_recipe(&self, recipe_id: RecipeId) -> Result<usize, InteractionStoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        guard.retired.insert(recipe_id);
        let before = guard.interactions.len();
        guard.interactions.retain(|(_, rid, _), _| *rid != recipe_id);
        Ok(before - guard.interactions.len())
    }
}
