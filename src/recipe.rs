use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::RecipeConfig;
use crate::ingredient::{parse_ingredients, Ingredient};
use crate::model::{LikedRecipe, RecipeData};
use crate::quantity::Quantity;

/// Direction of a servings button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    Increase,
    Decrease,
}

/// A loaded recipe with parsed ingredients and derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub raw_ingredients: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub servings: u32,
    /// Estimated preparation time in minutes
    pub time: u32,
}

impl Recipe {
    /// Build a recipe from API data: parse ingredients, then estimate time and servings
    pub fn from_data(data: RecipeData, config: &RecipeConfig) -> Recipe {
        let mut recipe = Recipe {
            id: data.id,
            title: data.title,
            author: data.author,
            image: data.image,
            source_url: data.source_url,
            raw_ingredients: data.ingredients,
            ingredients: Vec::new(),
            servings: 0,
            time: 0,
        };
        recipe.parse_ingredients();
        recipe.calc_time(config.ingredients_per_period, config.minutes_per_period);
        recipe.calc_servings(config.default_servings);
        debug!(
            "recipe {} loaded: {} ingredients, {} min, serves {}",
            recipe.id,
            recipe.ingredients.len(),
            recipe.time,
            recipe.servings
        );
        recipe
    }

    pub fn parse_ingredients(&mut self) {
        self.ingredients = parse_ingredients(&self.raw_ingredients);
    }

    pub fn calc_time(&mut self, ingredients_per_period: u32, minutes_per_period: u32) {
        self.time = estimate_time(
            self.ingredients.len(),
            ingredients_per_period,
            minutes_per_period,
        );
    }

    pub fn calc_servings(&mut self, default_servings: u32) {
        self.servings = default_servings.max(1);
    }

    /// Step servings up or down by one, rescaling every quantity.
    ///
    /// Returns `false` and leaves the recipe untouched when a decrease would go below 1.
    pub fn update_servings(&mut self, change: ServingsChange) -> bool {
        let target = match change {
            ServingsChange::Increase => self.servings.saturating_add(1),
            ServingsChange::Decrease => self.servings.saturating_sub(1),
        };
        self.scale_to(target)
    }

    /// Rescale to an arbitrary servings count (at least 1)
    pub fn scale_to(&mut self, servings: u32) -> bool {
        if servings < 1 || servings == self.servings {
            return false;
        }
        self.ingredients = scale_ingredients(&self.ingredients, self.servings, servings);
        self.servings = servings;
        true
    }

    pub fn to_liked(&self) -> LikedRecipe {
        LikedRecipe {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            image: self.image.clone(),
        }
    }
}

/// Fifteen minutes (by default) for every started group of three ingredients
pub fn estimate_time(
    ingredient_count: usize,
    ingredients_per_period: u32,
    minutes_per_period: u32,
) -> u32 {
    let per_period = ingredients_per_period.max(1) as usize;
    let periods = ingredient_count.div_ceil(per_period);
    (periods as u32).saturating_mul(minutes_per_period)
}

/// Multiply every set quantity by `new_servings / old_servings`.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    old_servings: u32,
    new_servings: u32,
) -> Vec<Ingredient> {
    match Quantity::new(new_servings as u64, old_servings.max(1) as u64) {
        Some(factor) => ingredients.iter().map(|i| i.scaled(factor)).collect(),
        None => ingredients.to_vec(),
    }
}
