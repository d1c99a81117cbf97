// Following a recipe author.
//
// The author must exist, and nobody follows themselves. Following twice is
// always refused, whatever the duplicate add policy says for recipes.

use crate::modules::interactions::core::ports::{
    RecipeCatalog, SubscriptionStore, SubscriptionStoreError, UserDirectory,
};
use crate::modules::interactions::core::subscription::AuthorCard;
use crate::modules::interactions::core::user::CurrentUser;
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;
use tracing::{info, warn};

pub struct SubscribeHandler<TSubscriptions, TUsers, TCatalog>
where
    TSubscriptions: SubscriptionStore + Send + Sync + 'static,
    TUsers: UserDirectory + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    subscriptions: Arc<TSubscriptions>,
    users: Arc<TUsers>,
    catalog: Arc<TCatalog>,
}

/// Resolves the author or answers 404.
pub(crate) async fn find_author<TUsers>(
    users: &TUsers,
    author_id: UserId,
) -> Result<CurrentUser, InteractionError>
where
    TUsers: UserDirectory + ?Sized,
{
    users
        .get_by_id(author_id)
        .await
        .map_err(|e| InteractionError::Unexpected(e.to_string()))?
        .ok_or(InteractionError::UserNotFound(author_id))
}

impl<TSubscriptions, TUsers, TCatalog> SubscribeHandler<TSubscriptions, TUsers, TCatalog>
where
    TSubscriptions: SubscriptionStore + Send + Sync + 'static,
    TUsers: UserDirectory + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(subscriptions: Arc<TSubscriptions>, users: Arc<TUsers>, catalog: Arc<TCatalog>) -> Self {
        Self {
            subscriptions,
            users,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        caller: UserId,
        author_id: UserId,
        recipes_limit: Option<usize>,
    ) -> Result<AuthorCard, InteractionError> {
        let author = find_author(self.users.as_ref(), author_id).await?;
        if author.id == caller {
            return Err(InteractionError::SelfSubscription);
        }

        match self.subscriptions.subscribe(caller, author_id).await {
            Ok(_) => {}
            Err(SubscriptionStoreError::Conflict { .. }) => {
                warn!(%caller, %author_id, "already subscribed");
                return Err(InteractionError::AlreadySubscribed);
            }
            Err(e) => return Err(e.into()),
        }
        info!(%caller, %author_id, "subscribed");

        let recipes = self.catalog.list().await?;
        Ok(AuthorCard::build(author, &recipes, recipes_limit))
    }
}
