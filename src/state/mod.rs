//! Value types for recipes, search results and derived summaries.

pub mod types;

pub use types::{
    ComplexSearchResponse, Difficulty, HealthFlag, Ingredient, Nutrient, Nutrition,
    NutritionSummary, Recipe, RecipeSummary,
};
