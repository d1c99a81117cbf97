use crate::modules::interactions::core::recipe::{Recipe, RecipeIngredient, Tag};
use crate::shared::core::primitives::{IngredientId, RecipeId, UserId};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeIngredientView {
    pub id: IngredientId,
    pub name: String,
    pub measurement_unit: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<RecipeIngredient> for RecipeIngredientView {
    fn from(v: RecipeIngredient) -> Self {
        Self {
            id: v.ingredient_id,
            name: v.name,
            measurement_unit: v.measurement_unit,
            amount: v.amount,
        }
    }
}

/// A recipe as seen by one caller, with their membership flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeView {
    pub id: RecipeId,
    pub author: UserId,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: u16,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<RecipeIngredientView>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

impl RecipeView {
    pub fn new(recipe: Recipe, is_favorited: bool, is_in_shopping_cart: bool) -> Self {
        Self {
            id: recipe.id,
            author: recipe.author_id,
            name: recipe.name,
            text: recipe.text,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
            tags: recipe.tags,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            is_favorited,
            is_in_shopping_cart,
        }
    }
}
