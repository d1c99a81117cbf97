// Recipe listing filtered by the caller's favorites and shopping cart.
//
// Filter semantics
// - `Some(true)` keeps recipes in the collection, `Some(false)` drops them,
//   `None` does not filter. Both filters combine with AND.
// - An anonymous caller asking for either filter gets nothing back.
// - Newest recipe (highest id) first.

use crate::modules::interactions::core::interaction::InteractionKind;
use crate::modules::interactions::core::ports::{InteractionStore, RecipeCatalog};
use crate::modules::interactions::core::recipe::RecipeSummary;
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shared::core::primitives::{RecipeId, UserId};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembershipFilter {
    pub is_favorited: Option<bool>,
    pub is_in_shopping_cart: Option<bool>,
}

impl MembershipFilter {
    fn is_empty(&self) -> bool {
        self.is_favorited.is_none() && self.is_in_shopping_cart.is_none()
    }
}

fn keeps(wanted: Option<bool>, members: &BTreeSet<RecipeId>, recipe_id: RecipeId) -> bool {
    wanted.is_none_or(|wanted| members.contains(&recipe_id) == wanted)
}

pub struct ListRecipesHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    catalog: Arc<TCatalog>,
}

impl<TStore, TCatalog> ListRecipesHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, catalog: Arc<TCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        viewer: Option<UserId>,
        filter: MembershipFilter,
    ) -> Result<Vec<RecipeSummary>, InteractionError> {
        let (favorites, cart) = match viewer {
            Some(user_id) => (
                self.store
                    .list_for_user(user_id, InteractionKind::Favorite)
                    .await?,
                self.store
                    .list_for_user(user_id, InteractionKind::ShoppingCart)
                    .await?,
            ),
            None if filter.is_empty() => (BTreeSet::new(), BTreeSet::new()),
            None => return Ok(Vec::new()),
        };

        let mut recipes: Vec<RecipeSummary> = self
            .catalog
            .list()
            .await?
            .iter()
            .filter(|recipe| keeps(filter.is_favorited, &favorites, recipe.id))
            .filter(|recipe| keeps(filter.is_in_shopping_cart, &cart, recipe.id))
            .map(|recipe| recipe.summary())
            .collect();
        recipes.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(recipes)
    }
}
