use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::interactions::adapters::inbound::graphql_types::{current_user, gql_error};
use crate::modules::interactions::use_cases::get_recipe::projection::{
    RecipeIngredientView, RecipeView,
};
use crate::shared::core::primitives::RecipeId;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRecipeIngredient {
    pub id: u64,
    pub name: String,
    pub measurement_unit: String,
    pub amount: String,
}

impl From<RecipeIngredientView> for GqlRecipeIngredient {
    fn from(v: RecipeIngredientView) -> Self {
        Self {
            id: v.id.0,
            name: v.name,
            measurement_unit: v.measurement_unit,
            amount: v.amount.normalize().to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRecipe {
    pub id: u64,
    pub author: u64,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: u16,
    pub tags: Vec<String>,
    pub ingredients: Vec<GqlRecipeIngredient>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

impl From<RecipeView> for GqlRecipe {
    fn from(v: RecipeView) -> Self {
        Self {
            id: v.id.0,
            author: v.author.0,
            name: v.name,
            text: v.text,
            image: v.image,
            cooking_time: v.cooking_time,
            tags: v.tags.into_iter().map(|t| t.slug).collect(),
            ingredients: v.ingredients.into_iter().map(Into::into).collect(),
            is_favorited: v.is_favorited,
            is_in_shopping_cart: v.is_in_shopping_cart,
        }
    }
}

#[derive(Default)]
pub struct RecipeQuery;

#[Object]
impl RecipeQuery {
    async fn recipe(&self, context: &Context<'_>, id: u64) -> GqlResult<GqlRecipe> {
        let state = context.data_unchecked::<AppState>();
        let viewer = current_user(context).map(|u| u.id);
        let view = state
            .get_recipe_handler
            .handle(viewer, RecipeId(id))
            .await
            .map_err(gql_error)?;
        Ok(view.into())
    }
}
