//! Core value types shared by the API client, cache, favorites store and UI.

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Numeric quantity, when the API reports one.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Unit label (may be empty, e.g. "2 eggs").
    #[serde(default)]
    pub unit: String,
    /// Ingredient name.
    #[serde(default)]
    pub name: String,
}

/// A single nutrient record as reported by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    /// Nutrient name, e.g. `Protein` or `Vitamin A`.
    pub name: String,
    /// Amount in `unit`.
    #[serde(default)]
    pub amount: f64,
    /// Unit label, e.g. `g`, `mg` or `% of Daily Needs`.
    #[serde(default)]
    pub unit: String,
}

/// Nutrition block attached to detailed recipes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Nutrient records in API order.
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

/// Full recipe record as returned by the details endpoint.
///
/// Search results are upgraded to this shape by fetching details per id, and
/// favorites are persisted in exactly this shape. Field names follow the
/// API's camelCase so stored favorites stay readable next to raw responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// API identifier; favorites are unique by this id.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Total preparation plus cooking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// Number of servings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Cuisine tags, possibly empty.
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Link to the original recipe page; required for sharing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Ingredient lines.
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    /// Instructions, usually an HTML `<ol>` list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Nutrition data when requested with `includeNutrition`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    /// Like count shown in list tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_likes: Option<u64>,
    /// Short HTML description used for share text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Ingredients of the query the recipe uses (ingredient search only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_ingredient_count: Option<u32>,
    /// Ingredients the recipe needs beyond the query (ingredient search only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_ingredient_count: Option<u32>,
}

/// Short record returned by the search endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// API identifier used to fetch details.
    pub id: u64,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Matched ingredient count (ingredient search only).
    #[serde(default)]
    pub used_ingredient_count: Option<u32>,
    /// Missing ingredient count (ingredient search only).
    #[serde(default)]
    pub missed_ingredient_count: Option<u32>,
}

/// Envelope of the `complexSearch` endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ComplexSearchResponse {
    /// Matching recipes.
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
}

/// Difficulty tier derived from cook time and ingredient count.
///
/// Ordering follows the display order, so sorting by this value lists easy
/// recipes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// At most 30 minutes and 10 ingredients.
    Easy,
    /// At most 60 minutes and 15 ingredients.
    Medium,
    /// Anything longer or larger.
    Hard,
}

impl Difficulty {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative flag produced by the nutrition heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthFlag {
    /// Protein above 25 g.
    HighProtein,
    /// Vitamin A above 20 % of daily needs.
    GoodVitaminA,
    /// Sodium above 1000 mg.
    HighSodium,
}

impl HealthFlag {
    /// `true` for flags that warn rather than praise.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::HighSodium)
    }

    /// Display label without decoration.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighProtein => "High in Protein",
            Self::GoodVitaminA => "Good source of Vitamin A",
            Self::HighSodium => "High in Sodium",
        }
    }
}

impl std::fmt::Display for HealthFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.is_warning() { "⚠️" } else { "✅" };
        write!(f, "{mark} {}", self.label())
    }
}

/// Derived health summary for a recipe's nutrition block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NutritionSummary {
    /// Calories rendered as `"<amount> <unit>"`.
    pub calories: String,
    /// Flags in fixed order: protein, vitamin A, sodium.
    pub health_metrics: Vec<HealthFlag>,
    /// Score in `0..=100`.
    pub nutrition_score: u8,
}
