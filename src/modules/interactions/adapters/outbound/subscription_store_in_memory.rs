// In memory implementation of the SubscriptionStore port.
//
// Subscriptions are kept in insertion order, which is the order followed
// authors are listed in. Check and insert share one write guard.

use crate::modules::interactions::core::ports::{SubscriptionStore, SubscriptionStoreError};
use crate::modules::interactions::core::subscription::Subscription;
use crate::shared::core::primitives::UserId;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: RwLock<Vec<Subscription>>,
    is_offline: bool,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), SubscriptionStoreError> {
        if self.is_offline {
            return Err(SubscriptionStoreError::Backend(
                "Subscription store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SubscriptionStore for InMemorySubscriptionStore {
    async fn subscribe(
        &self,
        user_id: UserId,
        author_id: UserId,
    ) -> Result<Subscription, SubscriptionStoreError> {
        self.ensure_online()?;
        let mut guard = self.subscriptions.write().await;
        if guard
            .iter()
            .any(|s| s.user_id == user_id && s.author_id == author_id)
        {
            return Err(SubscriptionStoreError::Conflict { user_id, author_id });
        }
        let subscription = Subscription {
            user_id,
            author_id,
            created_at: Utc::now().timestamp_millis(),
        };
        guard.push(subscription.clone());
        Ok(subscription)
    }

    async fn unsubscribe(
        &self,
        user_id: UserId,
        author_id: UserId,
    ) -> Result<bool, SubscriptionStoreError> {
        self.ensure_online()?;
        let mut guard = self.subscriptions.write().await;
        let before = guard.len();
        guard.retain(|s| !(s.user_id == user_id && s.author_id == author_id));
        Ok(guard.len() < before)
    }

    async fn list_authors(&self, user_id: UserId) -> Result<Vec<UserId>, SubscriptionStoreError> {
        self.ensure_online()?;
        Ok(self
            .subscriptions
            .read()
            .await
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.author_id)
            .collect())
    }
}
