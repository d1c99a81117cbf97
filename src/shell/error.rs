use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::modules::interactions::use_cases::errors::InteractionError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl InteractionError {
    pub fn status(&self) -> StatusCode {
        match self {
            InteractionError::AlreadyExists(_)
            | InteractionError::NotFound(_)
            | InteractionError::InvalidQuery(_)
            | InteractionError::EmptyCart
            | InteractionError::SelfSubscription
            | InteractionError::AlreadySubscribed
            | InteractionError::NotSubscribed => StatusCode::BAD_REQUEST,
            InteractionError::RecipeNotFound(_)
            | InteractionError::UserNotFound(_)
            | InteractionError::InvalidId(_) => StatusCode::NOT_FOUND,
            InteractionError::Unauthorized => StatusCode::UNAUTHORIZED,
            InteractionError::Forbidden => StatusCode::FORBIDDEN,
            InteractionError::Store(_)
            | InteractionError::Subscriptions(_)
            | InteractionError::Catalog(_)
            | InteractionError::Aggregate(_)
            | InteractionError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}
