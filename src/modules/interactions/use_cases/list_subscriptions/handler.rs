// The caller's followed authors, oldest subscription first, each as an
// author card. An author that has left the directory is skipped.

use crate::modules::interactions::core::ports::{RecipeCatalog, SubscriptionStore, UserDirectory};
use crate::modules::interactions::core::subscription::AuthorCard;
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;
use tracing::warn;

pub struct ListSubscriptionsHandler<TSubscriptions, TUsers, TCatalog>
where
    TSubscriptions: SubscriptionStore + Send + Sync + 'static,
    TUsers: UserDirectory + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    subscriptions: Arc<TSubscriptions>,
    users: Arc<TUsers>,
    catalog: Arc<TCatalog>,
}

impl<TSubscriptions, TUsers, TCatalog> ListSubscriptionsHandler<TSubscriptions, TUsers, TCatalog>
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
        recipes_limit: Option<usize>,
    ) -> Result<Vec<AuthorCard>, InteractionError> {
        let author_ids = self.subscriptions.list_authors(caller).await?;
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }
        let recipes = self.catalog.list().await?;

        let mut cards = Vec::with_capacity(author_ids.len());
        for author_id in author_ids {
            let author = self
                .users
                .get_by_id(author_id)
                .await
                .map_err(|e| InteractionError::Unexpected(e.to_string()))?;
            match author {
                Some(author) => cards.push(AuthorCard::build(author, &recipes, recipes_limit)),
                None => warn!(%caller, %author_id, "followed author is gone"),
            }
        }
        Ok(cards)
    }
}
