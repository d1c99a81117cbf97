use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::interactions::use_cases::list_subscriptions::inbound::http::RecipesLimitParams;
use crate::shared::core::primitives::UserId;
use crate::shell::auth::RequireUser;
use crate::shell::path::IdPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    IdPath(author_id): IdPath,
    Query(params): Query<RecipesLimitParams>,
) -> Response {
    let limit = match params.limit() {
        Ok(limit) => limit,
        Err(e) => return e.into_response(),
    };
    match state
        .subscribe_handler
        .handle(user.id, UserId(author_id), limit)
        .await
    {
        Ok(card) => (StatusCode::CREATED, Json(card)).into_response(),
        Err(e) => e.into_response(),
    }
}
