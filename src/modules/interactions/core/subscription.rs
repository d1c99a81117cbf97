// A user following a recipe author.
//
// The card shown for a followed author lists their newest recipes first,
// optionally capped, and always carries the full recipe count. A cap of zero
// means no cap.

use crate::modules::interactions::core::recipe::{Recipe, RecipeSummary};
use crate::modules::interactions::core::user::CurrentUser;
use crate::shared::core::primitives::{Millis, UserId};
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;

/// At most one exists per (user_id, author_id). Nobody follows themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: UserId,
    pub author_id: UserId,
    pub created_at: Millis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCard {
    pub id: UserId,
    pub email: String,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeSummary>,
    pub recipes_count: usize,
}

impl AuthorCard {
    /// `recipes` may be the whole catalog, only the author's own are kept.
    pub fn build(author: CurrentUser, recipes: &[Recipe], limit: Option<usize>) -> Self {
        let mut own: Vec<&Recipe> = recipes
            .iter()
            .filter(|recipe| recipe.author_id == author.id)
            .collect();
        own.sort_by(|a, b| b.id.cmp(&a.id));
        let recipes_count = own.len();
        Self {
            id: author.id,
            email: author.email,
            is_subscribed: true,
            recipes: own
                .into_iter()
                .take(limit.unwrap_or(recipes_count))
                .map(Recipe::summary)
                .collect(),
            recipes_count,
        }
    }
}

/// Reads the `recipes_limit` query value.
pub fn parse_recipes_limit(raw: Option<&str>) -> Result<Option<usize>, ParseIntError> {
    match raw {
        None => Ok(None),
        Some(raw) => Ok(Some(raw.trim().parse::<usize>()?).filter(|limit| *limit > 0)),
    }
}
