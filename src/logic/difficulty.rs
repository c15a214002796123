use crate::state::{Difficulty, Recipe};

/// What: Count the ingredients of a recipe for display and difficulty.
///
/// Inputs:
/// - `recipe`: Detailed recipe or a search summary promoted to `Recipe`
///
/// Output:
/// - Number of extended ingredients, or used + missed counts when the recipe
///   carries no ingredient list.
#[must_use]
pub fn ingredient_count(recipe: &Recipe) -> usize {
    let listed = recipe.extended_ingredients.len();
    if listed > 0 {
        return listed;
    }
    match (recipe.used_ingredient_count, recipe.missed_ingredient_count) {
        (None, None) => 0,
        (used, missed) => (used.unwrap_or(0) + missed.unwrap_or(0)) as usize,
    }
}

/// What: Classify a recipe as Easy, Medium or Hard.
///
/// Inputs:
/// - `recipe`: Recipe with optional `ready_in_minutes` and its ingredient list
///
/// Output:
/// - `Hard` when time > 60 or ingredients > 15, `Medium` when time > 30 or
///   ingredients > 10, otherwise `Easy`.
///
/// Details:
/// - Missing cook time counts as zero minutes.
/// - Only the extended ingredient list is counted, so a bare search summary
///   is judged by time alone.
#[must_use]
pub fn calculate_difficulty(recipe: &Recipe) -> Difficulty {
    let minutes = recipe.ready_in_minutes.unwrap_or(0);
    let ingredients = recipe.extended_ingredients.len();
    if minutes > 60 || ingredients > 15 {
        Difficulty::Hard
    } else if minutes > 30 || ingredients > 10 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// What: Sort recipes Easy, Medium, Hard in place.
///
/// Details:
/// - Stable, so recipes of the same tier keep their API order.
pub fn sort_by_difficulty(recipes: &mut [Recipe]) {
    recipes.sort_by_key(calculate_difficulty);
}
