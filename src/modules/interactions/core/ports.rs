// Ports define what the interactions core needs from the outside world.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
// - In memory implementations back the tests and local development.

use crate::modules::interactions::core::interaction::{Interaction, InteractionKind};
use crate::modules::interactions::core::recipe::{Recipe, RecipeIngredientLine};
use crate::modules::interactions::core::subscription::Subscription;
use crate::modules::interactions::core::user::CurrentUser;
use crate::shared::core::primitives::{RecipeId, UserId};
use async_trait::async_trait;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InteractionStoreError {
    #[error("{kind} interaction already recorded for user {user_id} and recipe {recipe_id}")]
    Conflict {
        user_id: UserId,
        recipe_id: RecipeId,
        kind: InteractionKind,
    },

    /// The recipe was purged. No new interaction may point at it.
    #[error("recipe {0} was deleted")]
    RecipeRetired(RecipeId),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Durable set of interactions, unique per (user, recipe, kind).
#[async_trait]
pub trait InteractionStore: Send + Sync {
    async fn exists(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        kind: InteractionKind,
    ) -> Result<bool, InteractionStoreError>;

    /// Atomic check and insert. A second add for the same triple is a `Conflict`.
    async fn add(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        kind: InteractionKind,
    ) -> Result<Interaction, InteractionStoreError>;

    /// `Ok(false)` when there was nothing to remove.
    async fn remove(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        kind: InteractionKind,
    ) -> Result<bool, InteractionStoreError>;

    async fn list_for_user(
        &self,
        user_id: UserId,
        kind: InteractionKind,
    ) -> Result<BTreeSet<RecipeId>, InteractionStoreError>;

    /// Cascade for a deleted recipe. Returns the number of removed records.
    /// Any later `add` for the recipe fails with `RecipeRetired`.
    async fn purge_recipe(&self, recipe_id: RecipeId) -> Result<usize, InteractionStoreError>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    async fn get_by_id(&self, recipe_id: RecipeId) -> Result<Option<Recipe>, CatalogError>;

    async fn ingredient_lines(
        &self,
        recipe_id: RecipeId,
    ) -> Result<Vec<RecipeIngredientLine>, CatalogError>;

    async fn list(&self) -> Result<Vec<Recipe>, CatalogError>;

    /// `Ok(false)` when the recipe did not exist.
    async fn delete(&self, recipe_id: RecipeId) -> Result<bool, CatalogError>;
}

#[derive(Debug, Error)]
pub enum SubscriptionStoreError {
    #[error("user {user_id} already follows {author_id}")]
    Conflict { user_id: UserId, author_id: UserId },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Who follows whom, unique per (user, author).
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Atomic check and insert. A second subscribe for the same pair is a `Conflict`.
    async fn subscribe(
        &self,
        user_id: UserId,
        author_id: UserId,
    ) -> Result<Subscription, SubscriptionStoreError>;

    /// `Ok(false)` when the user did not follow the author.
    async fn unsubscribe(&self, user_id: UserId, author_id: UserId)
    -> Result<bool, SubscriptionStoreError>;

    /// Followed authors, oldest subscription first.
    async fn list_authors(&self, user_id: UserId) -> Result<Vec<UserId>, SubscriptionStoreError>;
}

/// Lookup of registered users by id.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_by_id(&self, user_id: UserId) -> anyhow::Result<Option<CurrentUser>>;
}

/// Resolves a request token into the caller's identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> anyhow::Result<Option<CurrentUser>>;
}
