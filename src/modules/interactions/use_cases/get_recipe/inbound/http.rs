use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shared::core::primitives::RecipeId;
use crate::shell::auth::MaybeUser;
use crate::shell::path::IdPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    IdPath(recipe_id): IdPath,
) -> Response {
    let viewer = user.map(|u| u.id);
    match state
        .get_recipe_handler
        .handle(viewer, RecipeId(recipe_id))
        .await
    {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}
