use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::interactions::core::interaction::InteractionKind;
use crate::modules::interactions::use_cases::add_interaction::command::AddInteraction;
use crate::shared::core::primitives::{RecipeId, UserId};
use crate::shell::auth::RequireUser;
use crate::shell::path::IdPath;
use crate::shell::state::AppState;

pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    IdPath(recipe_id): IdPath,
) -> Response {
    handle(state, user.id, recipe_id, InteractionKind::ShoppingCart).await
}

pub async fn add_to_favorites(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    IdPath(recipe_id): IdPath,
) -> Response {
    handle(state, user.id, recipe_id, InteractionKind::Favorite).await
}

async fn handle(state: AppState, user_id: UserId, recipe_id: u64, kind: InteractionKind) -> Response {
    let command = AddInteraction {
        user_id,
        recipe_id: RecipeId(recipe_id),
        kind,
    };

    match state.add_handler.handle(command).await {
        Ok(added) if added.created => (StatusCode::CREATED, Json(added.recipe)).into_response(),
        Ok(added) => (StatusCode::OK, Json(added.recipe)).into_response(),
        Err(e) => e.into_response(),
    }
}
