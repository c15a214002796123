//! Recipe API access: request URLs, the HTTP client, and the trait the
//! interactive shell consumes.

mod client;
pub mod urls;

pub use client::SpoonacularClient;

use crate::state::{Recipe, RecipeSummary};

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Read-only recipe lookups.
///
/// Details:
/// - Implemented by [`SpoonacularClient`] for real requests and by in-memory
///   fakes in tests.
/// - Errors are returned, not printed; the shell turns them into a message
///   and an empty result.
#[allow(async_fn_in_trait)]
pub trait RecipeApi {
    /// Summaries of recipes that use the given ingredients.
    async fn search_recipes_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSummary>>;

    /// Summaries of recipes of a cuisine, optionally narrowed to a meal type.
    async fn find_recipes_by_cuisine(
        &self,
        cuisine: &str,
        meal_type: Option<&str>,
    ) -> Result<Vec<RecipeSummary>>;

    /// Full record of one recipe, nutrition included.
    async fn get_recipe_details(&self, id: u64) -> Result<Recipe>;
}
