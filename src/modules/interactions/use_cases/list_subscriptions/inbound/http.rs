use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::interactions::core::subscription::parse_recipes_limit;
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shell::auth::RequireUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecipesLimitParams {
    pub recipes_limit: Option<String>,
}

impl RecipesLimitParams {
    pub fn limit(&self) -> Result<Option<usize>, InteractionError> {
        parse_recipes_limit(self.recipes_limit.as_deref())
            .map_err(|_| InteractionError::InvalidQuery("recipes_limit must be a number".into()))
    }
}

pub async fn handle(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(params): Query<RecipesLimitParams>,
) -> Response {
    let limit = match params.limit() {
        Ok(limit) => limit,
        Err(e) => return e.into_response(),
    };
    match state.list_subscriptions_handler.handle(user.id, limit).await {
        Ok(cards) => Json(cards).into_response(),
        Err(e) => e.into_response(),
    }
}
