use crate::modules::interactions::core::interaction::InteractionKind;
use crate::modules::interactions::core::ports::{InteractionStore, RecipeCatalog};
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::modules::interactions::use_cases::get_recipe::projection::RecipeView;
use crate::shared::core::primitives::{RecipeId, UserId};
use std::sync::Arc;

pub struct GetRecipeHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    catalog: Arc<TCatalog>,
}

impl<TStore, TCatalog> GetRecipeHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, catalog: Arc<TCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Anonymous viewers always see both flags as `false`.
    pub async fn handle(
        &self,
        viewer: Option<UserId>,
        recipe_id: RecipeId,
    ) -> Result<RecipeView, InteractionError> {
        let recipe = self
            .catalog
            .get_by_id(recipe_id)
            .await?
            .ok_or(InteractionError::RecipeNotFound(recipe_id))?;

        let (is_favorited, is_in_shopping_cart) = match viewer {
            Some(user_id) => (
                self.store
                    .exists(user_id, recipe_id, InteractionKind::Favorite)
                    .await?,
                self.store
                    .exists(user_id, recipe_id, InteractionKind::ShoppingCart)
                    .await?,
            ),
            None => (false, false),
        };

        Ok(RecipeView::new(recipe, is_favorited, is_in_shopping_cart))
    }
}
