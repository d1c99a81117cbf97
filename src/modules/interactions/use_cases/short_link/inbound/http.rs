use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::primitives::RecipeId;
use crate::shell::path::IdPath;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ShortLinkResponse {
    #[serde(rename = "short-link")]
    pub short_link: String,
}

pub async fn get_link(State(state): State<AppState>, IdPath(recipe_id): IdPath) -> Response {
    match state.short_link_handler.link(RecipeId(recipe_id)).await {
        Ok(short_link) => Json(ShortLinkResponse { short_link }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn follow(State(state): State<AppState>, IdPath(recipe_id): IdPath) -> Response {
    match state.short_link_handler.resolve(RecipeId(recipe_id)).await {
        Ok(target) => (StatusCode::FOUND, [(LOCATION, target)]).into_response(),
        Err(e) => e.into_response(),
    }
}
