use crate::modules::interactions::core::interaction::InteractionKind;
use crate::modules::interactions::core::ports::{
    CatalogError, InteractionStoreError, SubscriptionStoreError,
};
use crate::modules::interactions::core::shopping_list::AmountOverflow;
use crate::shared::core::primitives::{RecipeId, UserId};
use thiserror::Error;

pub const NOT_FOUND_DETAIL: &str = "Not found.";
pub const SERVER_ERROR_DETAIL: &str = "A server error occurred.";

/// Errors surfaced by the interaction use cases. The display text of the
/// user facing variants is the `detail` message returned to clients.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("Recipe is already in {}", .0.collection())]
    AlreadyExists(InteractionKind),

    #[error("Recipe is not in {}", .0.collection())]
    NotFound(InteractionKind),

    #[error("recipe {0} does not exist")]
    RecipeNotFound(RecipeId),

    #[error("user {0} does not exist")]
    UserNotFound(UserId),

    /// A path segment that should have been an id.
    #[error("invalid id in path: {0}")]
    InvalidId(String),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("The shopping cart is empty")]
    EmptyCart,

    #[error("You cannot subscribe to yourself")]
    SelfSubscription,

    #[error("You are already subscribed to this user")]
    AlreadySubscribed,

    #[error("You are not subscribed to this user")]
    NotSubscribed,

    #[error("Authentication credentials were not provided.")]
    Unauthorized,

    #[error("You do not have permission to perform this action.")]
    Forbidden,

    #[error(transparent)]
    Store(#[from] InteractionStoreError),

    #[error(transparent)]
    Subscriptions(#[from] SubscriptionStoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Aggregate(#[from] AmountOverflow),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl InteractionError {
    /// Failures of our own backends. Inbound adapters log them and show a
    /// generic message.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            InteractionError::Store(_)
                | InteractionError::Subscriptions(_)
                | InteractionError::Catalog(_)
                | InteractionError::Aggregate(_)
                | InteractionError::Unexpected(_)
        )
    }

    /// The message a client gets to see.
    pub fn detail(&self) -> String {
        match self {
            InteractionError::RecipeNotFound(_)
            | InteractionError::UserNotFound(_)
            | InteractionError::InvalidId(_) => NOT_FOUND_DETAIL.to_string(),
            e if e.is_internal() => SERVER_ERROR_DETAIL.to_string(),
            other => other.to_string(),
        }
    }
}
