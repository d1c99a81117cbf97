// Shared recipe fixtures.
//
// The base recipe is read from JSON so the defaults live next to the other
// fixture documents. Builders override what a test cares about.

use crate::modules::interactions::core::recipe::{Recipe, RecipeIngredient, Tag};
use crate::shared::core::primitives::{IngredientId, RecipeId, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDto {
    pub author_id: u64,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: u16,
    pub tags: Vec<Tag>,
}

pub struct RecipeBuilder {
    inner: Recipe,
}

#[allow(dead_code)]
impl RecipeBuilder {
    pub fn new(id: u64) -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/recipe.json").unwrap();
        let dto: RecipeDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: Recipe {
                id: RecipeId(id),
                author_id: UserId(dto.author_id),
                name: dto.name,
                text: dto.text,
                image: dto.image,
                cooking_time: dto.cooking_time,
                tags: dto.tags,
                ingredients: Vec::new(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.inner.image = Some(v.into());
        self
    }

    pub fn cooking_time(mut self, v: u16) -> Self {
        self.inner.cooking_time = v;
        self
    }

    pub fn author(mut self, v: u64) -> Self {
        self.inner.author_id = UserId(v);
        self
    }

    /// Appends an ingredient. The id is derived from the position.
    pub fn ingredient(mut self, name: &str, unit: &str, amount: &str) -> Self {
        let ingredient_id = IngredientId(self.inner.ingredients.len() as u64 + 1);
        self.inner.ingredients.push(RecipeIngredient {
            ingredient_id,
            name: name.to_string(),
            measurement_unit: unit.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
        });
        self
    }

    pub fn build(self) -> Recipe {
        self.inner
    }
}

pub fn flour_and_sugar(id: u64) -> Recipe {
    RecipeBuilder::new(id)
        .name("Sweet crepes")
        .ingredient("Flour", "g", "200")
        .ingredient("Sugar", "g", "50")
        .build()
}

pub fn flour_and_egg(id: u64) -> Recipe {
    RecipeBuilder::new(id)
        .name("Egg bread")
        .author(2)
        .ingredient("Flour", "g", "100")
        .ingredient("Egg", "pcs", "2")
        .build()
}

#[cfg(test)]
mod recipe_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_reads_the_base_recipe_from_json() {
        let recipe = RecipeBuilder::new(7).build();
        assert_eq!(recipe.id, RecipeId(7));
        assert_eq!(recipe.author_id, UserId(1));
        assert_eq!(recipe.name, "Weeknight pancakes");
        assert_eq!(recipe.cooking_time, 20);
        assert_eq!(recipe.tags.len(), 1);
        assert!(recipe.ingredients.is_empty());
    }

    #[rstest]
    fn ingredient_appends_in_order() {
        let recipe = flour_and_egg(2);
        let names: Vec<_> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Flour", "Egg"]);
        assert_eq!(recipe.ingredients[1].ingredient_id, IngredientId(2));
        assert_eq!(recipe.author_id, UserId(2));
    }
}
