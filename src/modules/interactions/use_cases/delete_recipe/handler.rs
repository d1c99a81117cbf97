// Author-only recipe deletion.
//
// Removing a recipe cascades to every favorite and cart entry that points at
// it, whoever owns them.

use crate::modules::interactions::core::ports::{InteractionStore, RecipeCatalog};
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shared::core::primitives::{RecipeId, UserId};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DeleteRecipeHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    catalog: Arc<TCatalog>,
}

impl<TStore, TCatalog> DeleteRecipeHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, catalog: Arc<TCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, caller: UserId, recipe_id: RecipeId) -> Result<(), InteractionError> {
        let recipe = self
            .catalog
            .get_by_id(recipe_id)
            .await?
            .ok_or(InteractionError::RecipeNotFound(recipe_id))?;
        if recipe.author_id != caller {
            warn!(%caller, %recipe_id, author = %recipe.author_id, "delete by non-author refused");
            return Err(InteractionError::Forbidden);
        }

        if !self.catalog.delete(recipe_id).await? {
            // Lost a race with another delete of the same recipe.
            return Err(InteractionError::RecipeNotFound(recipe_id));
        }
        let purged = self.store.purge_recipe(recipe_id).await?;
        info!(%recipe_id, purged, "recipe deleted");
        Ok(())
    }
}
