// In memory recipe catalog.
//
// Stands in for the recipes application that owns recipes, ingredients and
// tags. Seeded at startup, read by every interaction use case.

use crate::modules::interactions::core::ports::{CatalogError, RecipeCatalog};
use crate::modules::interactions::core::recipe::{Recipe, RecipeIngredientLine};
use crate::shared::core::primitives::RecipeId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecipeCatalog {
    recipes: RwLock<BTreeMap<RecipeId, Recipe>>,
    is_offline: bool,
}

impl InMemoryRecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes.into_iter().map(|r| (r.id, r)).collect()),
            is_offline: false,
        }
    }

    pub async fn insert(&self, recipe: Recipe) {
        self.recipes.write().await.insert(recipe.id, recipe);
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), CatalogError> {
        if self.is_offline {
            return Err(CatalogError::Backend("Recipe catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecipeCatalog for InMemoryRecipeCatalog {
    async fn get_by_id(&self, recipe_id: RecipeId) -> Result<Option<Recipe>, CatalogError> {
        self.ensure_online()?;
        Ok(self.recipes.read().await.get(&recipe_id).cloned())
    }

    async fn ingredient_lines(
        &self,
        recipe_id: RecipeId,
    ) -> Result<Vec<RecipeIngredientLine>, CatalogError> {
        self.ensure_online()?;
        Ok(self
            .recipes
            .read()
            .await
            .get(&recipe_id)
            .map(Recipe::ingredient_lines)
            .unwrap_or_default())
    }

    async fn list(&self) -> Result<Vec<Recipe>, CatalogError> {
        self.ensure_online()?;
        Ok(self.recipes.read().await.values().cloned().collect())
    }

    async fn delete(&self, recipe_id: RecipeId) -> Result<bool, CatalogError> {
        self.ensure_online()?;
        Ok(self.recipes.write().await.remove(&recipe_id).is_some())
    }
}
