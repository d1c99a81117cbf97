use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::interactions::adapters::inbound::graphql_types::{
    GqlInteractionKind, GqlRecipeSummary, gql_error, require_user,
};
use crate::modules::interactions::use_cases::add_interaction::command::AddInteraction;
use crate::shared::core::primitives::RecipeId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddInteractionMutation;

#[Object]
impl AddInteractionMutation {
    async fn add_interaction(
        &self,
        context: &Context<'_>,
        recipe_id: u64,
        kind: GqlInteractionKind,
    ) -> GqlResult<GqlRecipeSummary> {
        let user = require_user(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = AddInteraction {
            user_id: user.id,
            recipe_id: RecipeId(recipe_id),
            kind: kind.into(),
        };

        let added = state.add_handler.handle(command).await.map_err(gql_error)?;
        Ok(added.recipe.into())
    }
}
