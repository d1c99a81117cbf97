// Request identity.
//
// `Authorization: Token <key>` is resolved through the Authenticator port.
// No header, or another scheme, means an anonymous caller. A token that
// resolves to nobody is refused outright, on every route.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{error, warn};

use crate::modules::interactions::core::user::CurrentUser;
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shell::state::AppState;

const SCHEME: &str = "Token ";

/// Caller identity for routes open to anonymous users.
pub struct MaybeUser(pub Option<CurrentUser>);

/// Caller identity for routes that need a signed in user.
pub struct RequireUser(pub CurrentUser);

fn bearer(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(SCHEME)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = InteractionError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer(parts) else {
            return Ok(MaybeUser(None));
        };
        match state.authenticator.authenticate(token).await {
            Ok(Some(user)) => Ok(MaybeUser(Some(user))),
            Ok(None) => {
                warn!("request with unknown token");
                Err(InteractionError::Unauthorized)
            }
            Err(e) => {
                error!(error = %e, "authenticator failed");
                Err(InteractionError::Unexpected(e.to_string()))
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = InteractionError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match MaybeUser::from_request_parts(parts, state).await? {
            MaybeUser(Some(user)) => Ok(RequireUser(user)),
            MaybeUser(None) => Err(InteractionError::Unauthorized),
        }
    }
}
