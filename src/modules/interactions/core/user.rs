use crate::shared::core::primitives::UserId;
use serde::{Deserialize, Serialize};

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
}
