// Read side of the recipe catalog as seen by the interactions context.
//
// The catalog owns these entities. Interactions only reference recipes by id
// and read ingredient lines when a shopping list is built.

use crate::shared::core::primitives::{IngredientId, RecipeId, TagId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub measurement_unit: String,
}

/// An ingredient as used by one recipe, with the amount that recipe needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub measurement_unit: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub author_id: UserId,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: u16,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            name: self.name.clone(),
            image: self.image.clone(),
            cooking_time: self.cooking_time,
        }
    }

    pub fn ingredient_lines(&self) -> Vec<RecipeIngredientLine> {
        self.ingredients
            .iter()
            .map(|ingredient| RecipeIngredientLine {
                recipe_id: self.id,
                ingredient_name: ingredient.name.clone(),
                measurement_unit: ingredient.measurement_unit.clone(),
                amount: ingredient.amount,
            })
            .collect()
    }
}

/// Short form returned when a recipe is added to favorites or the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredientLine {
    pub recipe_id: RecipeId,
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub amount: Decimal,
}
