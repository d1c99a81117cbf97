use crate::modules::interactions::core::ports::{InteractionStore, RecipeCatalog};
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::modules::interactions::use_cases::remove_interaction::command::RemoveInteraction;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RemoveInteractionHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    catalog: Arc<TCatalog>,
}

impl<TStore, TCatalog> RemoveInteractionHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, catalog: Arc<TCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, command: RemoveInteraction) -> Result<(), InteractionError> {
        if self.catalog.get_by_id(command.recipe_id).await?.is_none() {
            return Err(InteractionError::RecipeNotFound(command.recipe_id));
        }

        let removed = self
            .store
            .remove(command.user_id, command.recipe_id, command.kind)
            .await?;
        if !removed {
            warn!(
                user_id = %command.user_id,
                recipe_id = %command.recipe_id,
                kind = %command.kind,
                "nothing to remove"
            );
            return Err(InteractionError::NotFound(command.kind));
        }

        info!(
            user_id = %command.user_id,
            recipe_id = %command.recipe_id,
            kind = %command.kind,
            "interaction removed"
        );
        Ok(())
    }
}
