use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::primitives::UserId;
use crate::shell::auth::RequireUser;
use crate::shell::path::IdPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    IdPath(author_id): IdPath,
) -> Response {
    match state
        .unsubscribe_handler
        .handle(user.id, UserId(author_id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
