use crate::modules::interactions::core::ports::{SubscriptionStore, UserDirectory};
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::modules::interactions::use_cases::subscribe::handler::find_author;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;
use tracing::info;

pub struct UnsubscribeHandler<TSubscriptions, TUsers>
where
    TSubscriptions: SubscriptionStore + Send + Sync + 'static,
    TUsers: UserDirectory + Send + Sync + 'static,
{
    subscriptions: Arc<TSubscriptions>,
    users: Arc<TUsers>,
}

impl<TSubscriptions, TUsers> UnsubscribeHandler<TSubscriptions, TUsers>
where
    TSubscriptions: SubscriptionStore + Send + Sync + 'static,
    TUsers: UserDirectory + Send + Sync + 'static,
{
    pub fn new(subscriptions: Arc<TSubscriptions>, users: Arc<TUsers>) -> Self {
        Self {
            subscriptions,
            users,
        }
    }

    /// Unknown author is 404, a missing subscription is `NotSubscribed`.
    pub async fn handle(&self, caller: UserId, author_id: UserId) -> Result<(), InteractionError> {
        find_author(self.users.as_ref(), author_id).await?;
        if !self.subscriptions.unsubscribe(caller, author_id).await? {
            return Err(InteractionError::NotSubscribed);
        }
        info!(%caller, %author_id, "unsubscribed");
        Ok(())
    }
}
