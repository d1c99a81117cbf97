use async_graphql::{Context, Enum, SimpleObject};
use tracing::error;

use crate::modules::interactions::core::interaction::InteractionKind;
use crate::modules::interactions::core::recipe::RecipeSummary;
use crate::modules::interactions::core::user::CurrentUser;
use crate::modules::interactions::use_cases::errors::InteractionError;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlInteractionKind {
    Favorite,
    ShoppingCart,
}

impl From<GqlInteractionKind> for InteractionKind {
    fn from(v: GqlInteractionKind) -> Self {
        match v {
            GqlInteractionKind::Favorite => InteractionKind::Favorite,
            GqlInteractionKind::ShoppingCart => InteractionKind::ShoppingCart,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRecipeSummary {
    pub id: u64,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: u16,
}

impl From<RecipeSummary> for GqlRecipeSummary {
    fn from(v: RecipeSummary) -> Self {
        Self {
            id: v.id.0,
            name: v.name,
            image: v.image,
            cooking_time: v.cooking_time,
        }
    }
}

/// The caller attached to the request by the `/gql` handler, if any.
pub fn current_user(context: &Context<'_>) -> Option<CurrentUser> {
    context.data_opt::<Option<CurrentUser>>().cloned().flatten()
}

pub fn require_user(context: &Context<'_>) -> async_graphql::Result<CurrentUser> {
    current_user(context).ok_or_else(|| gql_error(InteractionError::Unauthorized))
}

/// Same wording as the REST `detail`. Backend failures are logged, not shown.
pub fn gql_error(e: InteractionError) -> async_graphql::Error {
    if e.is_internal() {
        error!(error = %e, "graphql request failed");
    }
    async_graphql::Error::new(e.detail())
}
