// Startup seed for the in memory catalog and user directory.
//
// Shape
// - `{ users: [..], tags: [..], ingredients: [..], recipes: [..] }`.
// - Recipes reference tags and ingredients by id. The loader resolves them
//   into full catalog entries and rejects documents a recipe form would
//   reject: no ingredients, repeated ingredients or tags, amounts outside
//   (0, 10000], cooking times outside 1..=1440 minutes, unknown references.

use crate::modules::interactions::adapters::outbound::recipe_catalog_in_memory::InMemoryRecipeCatalog;
use crate::modules::interactions::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::modules::interactions::core::recipe::{Ingredient, Recipe, RecipeIngredient, Tag};
use crate::modules::interactions::core::user::CurrentUser;
use crate::shared::core::primitives::{IngredientId, RecipeId, TagId, UserId};
use anyhow::{Context, bail};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tokio::fs;
use tracing::info;

pub const MAX_COOKING_TIME: u16 = 1440;
pub const MAX_AMOUNT: u32 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: UserId,
    pub email: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedAmount {
    pub id: IngredientId,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecipe {
    pub id: RecipeId,
    pub author_id: UserId,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: u16,
    #[serde(default)]
    pub tags: Vec<TagId>,
    pub ingredients: Vec<SeedAmount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipes: Vec<SeedRecipe>,
}

impl Seed {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("seed document is not valid JSON")
    }

    /// Resolves every recipe against the tag, ingredient and user tables.
    pub fn resolve_recipes(&self) -> anyhow::Result<Vec<Recipe>> {
        let users: HashSet<UserId> = self.users.iter().map(|u| u.id).collect();
        let tags: HashMap<TagId, &Tag> = self.tags.iter().map(|t| (t.id, t)).collect();
        let ingredients: HashMap<IngredientId, &Ingredient> =
            self.ingredients.iter().map(|i| (i.id, i)).collect();

        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(self.recipes.len());
        for seed in &self.recipes {
            if !seen.insert(seed.id) {
                bail!("recipe {} appears twice", seed.id);
            }
            if !users.contains(&seed.author_id) {
                bail!("recipe {} has unknown author {}", seed.id, seed.author_id);
            }
            if seed.cooking_time == 0 {
                bail!("recipe {} must take at least one minute", seed.id);
            }
            if seed.cooking_time > MAX_COOKING_TIME {
                bail!(
                    "recipe {} must take at most {MAX_COOKING_TIME} minutes",
                    seed.id
                );
            }
            if seed.ingredients.is_empty() {
                bail!("recipe {} has no ingredients", seed.id);
            }

            let mut used = HashSet::new();
            let mut lines = Vec::with_capacity(seed.ingredients.len());
            for entry in &seed.ingredients {
                let Some(ingredient) = ingredients.get(&entry.id) else {
                    bail!("recipe {} uses unknown ingredient {}", seed.id, entry.id);
                };
                if !used.insert(entry.id) {
                    bail!("recipe {} lists ingredient {} twice", seed.id, entry.id);
                }
                if entry.amount <= Decimal::ZERO {
                    bail!(
                        "recipe {} needs a positive amount of {}",
                        seed.id,
                        ingredient.name
                    );
                }
                if entry.amount > Decimal::from(MAX_AMOUNT) {
                    bail!(
                        "recipe {} needs at most {MAX_AMOUNT} of {}",
                        seed.id,
                        ingredient.name
                    );
                }
                lines.push(RecipeIngredient {
                    ingredient_id: ingredient.id,
                    name: ingredient.name.clone(),
                    measurement_unit: ingredient.measurement_unit.clone(),
                    amount: entry.amount,
                });
            }

            let mut tagged = HashSet::new();
            let mut recipe_tags = Vec::with_capacity(seed.tags.len());
            for tag_id in &seed.tags {
                let Some(tag) = tags.get(tag_id) else {
                    bail!("recipe {} uses unknown tag {}", seed.id, tag_id);
                };
                if !tagged.insert(*tag_id) {
                    bail!("recipe {} lists tag {} twice", seed.id, tag_id);
                }
                recipe_tags.push((*tag).clone());
            }

            recipes.push(Recipe {
                id: seed.id,
                author_id: seed.author_id,
                name: seed.name.clone(),
                text: seed.text.clone(),
                image: seed.image.clone(),
                cooking_time: seed.cooking_time,
                tags: recipe_tags,
                ingredients: lines,
            });
        }
        Ok(recipes)
    }

    /// Builds the adapters. Users without a token get a generated one, logged once.
    pub async fn into_adapters(self) -> anyhow::Result<(InMemoryRecipeCatalog, InMemoryUsers)> {
        let recipes = self.resolve_recipes()?;
        let users = InMemoryUsers::new();
        for seed in self.users {
            let user = CurrentUser {
                id: seed.id,
                email: seed.email,
            };
            match seed.token {
                Some(token) => users.register_with_token(user, token).await,
                None => {
                    let email = user.email.clone();
                    let token = users.issue_token(user).await;
                    info!(%email, %token, "issued API token");
                }
            }
        }
        info!(recipes = recipes.len(), "catalog seeded");
        Ok((InMemoryRecipeCatalog::with_recipes(recipes), users))
    }
}

pub async fn load_seed(path: &Path) -> anyhow::Result<(InMemoryRecipeCatalog, InMemoryUsers)> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    Seed::from_json(&raw)?.into_adapters().await
}
