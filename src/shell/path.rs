// Numeric ids in the URL path.
//
// A segment that is not a number is answered like a missing resource, with the
// usual `{"detail": ...}` body rather than axum's plain text rejection.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::modules::interactions::use_cases::errors::InteractionError;

pub struct IdPath(pub u64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = InteractionError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<u64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => Err(InteractionError::InvalidId(rejection.body_text())),
        }
    }
}
