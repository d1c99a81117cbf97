use crate::modules::interactions::core::ports::RecipeCatalog;
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::shared::core::primitives::RecipeId;
use std::sync::Arc;

/// Short, shareable links of the form `<base_url>/s/<id>`.
pub struct ShortLinkHandler<TCatalog>
where
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    catalog: Arc<TCatalog>,
    base_url: String,
}

impl<TCatalog> ShortLinkHandler<TCatalog>
where
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, base_url: impl Into<String>) -> Self {
        Self {
            catalog,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn link(&self, recipe_id: RecipeId) -> Result<String, InteractionError> {
        self.ensure_exists(recipe_id).await?;
        Ok(format!("{}/s/{}", self.base_url, recipe_id))
    }

    /// Path the short link redirects to.
    pub async fn resolve(&self, recipe_id: RecipeId) -> Result<String, InteractionError> {
        self.ensure_exists(recipe_id).await?;
        Ok(format!("/recipes/{recipe_id}"))
    }

    async fn ensure_exists(&self, recipe_id: RecipeId) -> Result<(), InteractionError> {
        match self.catalog.get_by_id(recipe_id).await? {
            Some(_) => Ok(()),
            None => Err(InteractionError::RecipeNotFound(recipe_id)),
        }
    }
}
