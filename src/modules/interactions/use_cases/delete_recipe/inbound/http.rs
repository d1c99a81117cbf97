use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::primitives::RecipeId;
use crate::shell::auth::RequireUser;
use crate::shell::path::IdPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    IdPath(recipe_id): IdPath,
) -> Response {
    match state
        .delete_recipe_handler
        .handle(user.id, RecipeId(recipe_id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
