use crate::shared::core::primitives::{Millis, RecipeId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminates the two relationships a user can record against a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Favorite,
    ShoppingCart,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 2] = [InteractionKind::Favorite, InteractionKind::ShoppingCart];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Favorite => "favorite",
            InteractionKind::ShoppingCart => "shopping_cart",
        }
    }

    /// Human readable collection name used in user facing messages.
    pub fn collection(&self) -> &'static str {
        match self {
            InteractionKind::Favorite => "favorites",
            InteractionKind::ShoppingCart => "the shopping cart",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored interaction. At most one exists per (user_id, recipe_id, kind).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    pub kind: InteractionKind,
    pub created_at: Millis,
}

/// What an add does when the interaction is already recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateAddPolicy {
    /// Answer with `AlreadyExists`.
    #[default]
    Reject,
    /// Succeed without creating anything.
    Ignore,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown duplicate add policy `{0}`, expected `reject` or `ignore`")]
pub struct UnknownPolicy(pub String);

impl FromStr for DuplicateAddPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicateAddPolicy::Reject),
            "ignore" => Ok(DuplicateAddPolicy::Ignore),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
