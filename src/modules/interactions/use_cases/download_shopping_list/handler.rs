// Builds a user's shopping list from the recipes in their cart.
//
// Reads the cart from the store, joins the catalog for ingredient lines and
// hands them to the pure aggregation. Nothing is cached, every download
// reflects the store at the time of the call.

use crate::modules::interactions::core::interaction::InteractionKind;
use crate::modules::interactions::core::ports::{InteractionStore, RecipeCatalog};
use crate::modules::interactions::core::shopping_list::{AggregatedLine, aggregate, render};
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;
use tracing::debug;

pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingList {
    pub lines: Vec<AggregatedLine>,
}

impl ShoppingList {
    pub fn to_text(&self) -> String {
        render(&self.lines)
    }
}

pub struct DownloadShoppingListHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    catalog: Arc<TCatalog>,
}

impl<TStore, TCatalog> DownloadShoppingListHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, catalog: Arc<TCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<ShoppingList, InteractionError> {
        let recipe_ids = self
            .store
            .list_for_user(user_id, InteractionKind::ShoppingCart)
            .await?;
        if recipe_ids.is_empty() {
            return Err(InteractionError::EmptyCart);
        }

        let mut lines = Vec::new();
        for recipe_id in &recipe_ids {
            lines.extend(self.catalog.ingredient_lines(*recipe_id).await?);
        }

        let aggregated = aggregate(lines)?;
        // A cart of recipes without ingredients has nothing to download either.
        if aggregated.is_empty() {
            return Err(InteractionError::EmptyCart);
        }

        debug!(
            %user_id,
            recipes = recipe_ids.len(),
            lines = aggregated.len(),
            "shopping list built"
        );
        Ok(ShoppingList { lines: aggregated })
    }
}
