use crate::modules::interactions::core::ports::{Authenticator, UserDirectory};
use crate::modules::interactions::core::user::CurrentUser;
use crate::shared::core::primitives::UserId;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Token table and user directory standing in for the platform's account service.
#[derive(Default)]
pub struct InMemoryUsers {
    tokens: RwLock<HashMap<String, CurrentUser>>,
    by_id: RwLock<BTreeMap<UserId, CurrentUser>>,
    is_offline: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the user under a freshly generated token and returns it.
    pub async fn issue_token(&self, user: CurrentUser) -> String {
        let token = Uuid::now_v7().simple().to_string();
        self.register_with_token(user, token.clone()).await;
        token
    }

    pub async fn register_with_token(&self, user: CurrentUser, token: impl Into<String>) {
        self.by_id.write().await.insert(user.id, user.clone());
        self.tokens.write().await.insert(token.into(), user);
    }

    /// Known to the directory but without a token, like a seeded author.
    pub async fn register(&self, user: CurrentUser) {
        self.by_id.write().await.insert(user.id, user);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl Authenticator for InMemoryUsers {
    async fn authenticate(&self, token: &str) -> anyhow::Result<Option<CurrentUser>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("User directory offline"));
        }
        Ok(self.tokens.read().await.get(token).cloned())
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUsers {
    async fn get_by_id(&self, user_id: UserId) -> anyhow::Result<Option<CurrentUser>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("User directory offline"));
        }
        Ok(self.by_id.read().await.get(&user_id).cloned())
    }
}
