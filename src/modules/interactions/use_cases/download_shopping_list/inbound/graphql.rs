use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::interactions::adapters::inbound::graphql_types::{gql_error, require_user};
use crate::modules::interactions::core::shopping_list::AggregatedLine;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlShoppingListLine {
    pub ingredient_name: String,
    pub measurement_unit: String,
    /// Normalised decimal, e.g. `300` or `2.5`.
    pub total_amount: String,
    pub line: String,
}

impl From<AggregatedLine> for GqlShoppingListLine {
    fn from(v: AggregatedLine) -> Self {
        Self {
            line: v.render(),
            total_amount: v.total_amount.normalize().to_string(),
            ingredient_name: v.ingredient_name,
            measurement_unit: v.measurement_unit,
        }
    }
}

#[derive(Default)]
pub struct ShoppingListQuery;

#[Object]
impl ShoppingListQuery {
    async fn shopping_list(&self, context: &Context<'_>) -> GqlResult<Vec<GqlShoppingListLine>> {
        let user = require_user(context)?;
        let state = context.data_unchecked::<AppState>();
        let list = state
            .download_handler
            .handle(user.id)
            .await
            .map_err(gql_error)?;
        Ok(list.lines.into_iter().map(Into::into).collect())
    }
}
