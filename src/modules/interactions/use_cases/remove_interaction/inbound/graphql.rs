use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::interactions::adapters::inbound::graphql_types::{
    GqlInteractionKind, gql_error, require_user,
};
use crate::modules::interactions::use_cases::remove_interaction::command::RemoveInteraction;
use crate::shared::core::primitives::RecipeId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RemoveInteractionMutation;

#[Object]
impl RemoveInteractionMutation {
    /// Returns `true` once the interaction is gone.
    async fn remove_interaction(
        &self,
        context: &Context<'_>,
        recipe_id: u64,
        kind: GqlInteractionKind,
    ) -> GqlResult<bool> {
        let user = require_user(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = RemoveInteraction {
            user_id: user.id,
            recipe_id: RecipeId(recipe_id),
            kind: kind.into(),
        };

        state
            .remove_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(true)
    }
}
