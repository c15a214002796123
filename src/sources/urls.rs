//! Request URL construction for the three API endpoints.
//!
//! Every query value is percent-encoded. The API key is appended last so
//! [`redact`] can cut it off for log output.

use crate::util::percent_encode;

/// Query parameter carrying the API key.
const KEY_PARAM: &str = "apiKey=";

/// What: URL of the `findByIngredients` search.
///
/// Inputs:
/// - `base`: API base URL without trailing slash
/// - `ingredients`: Terms to search for; blanks are dropped
/// - `number`: Maximum number of results
/// - `api_key`: Spoonacular key
#[must_use]
pub fn ingredients_url(base: &str, ingredients: &[String], number: u32, api_key: &str) -> String {
    let joined = ingredients
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{base}/recipes/findByIngredients?ingredients={}&number={number}&{KEY_PARAM}{}",
        percent_encode(&joined),
        percent_encode(api_key)
    )
}

/// What: URL of the `complexSearch` cuisine search.
///
/// Inputs:
/// - `base`: API base URL without trailing slash
/// - `cuisine`: Cuisine name
/// - `meal_type`: Optional meal type; omitted from the query when blank
/// - `number`: Maximum number of results
/// - `api_key`: Spoonacular key
#[must_use]
pub fn cuisine_url(
    base: &str,
    cuisine: &str,
    meal_type: Option<&str>,
    number: u32,
    api_key: &str,
) -> String {
    let type_param = meal_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(|m| format!("&type={}", percent_encode(m)))
        .unwrap_or_default();
    format!(
        "{base}/recipes/complexSearch?cuisine={}&number={number}{type_param}&{KEY_PARAM}{}",
        percent_encode(cuisine.trim()),
        percent_encode(api_key)
    )
}

/// URL of the recipe information endpoint, nutrition included.
#[must_use]
pub fn details_url(base: &str, id: u64, api_key: &str) -> String {
    format!(
        "{base}/recipes/{id}/information?includeNutrition=true&{KEY_PARAM}{}",
        percent_encode(api_key)
    )
}

/// Strip the API key from a request URL for logging.
#[must_use]
pub fn redact(url: &str) -> String {
    url.find(KEY_PARAM).map_or_else(
        || url.to_string(),
        |pos| format!("{}{KEY_PARAM}***", &url[..pos]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.spoonacular.com";

    #[test]
    fn ingredient_url_joins_and_encodes_terms() {
        let url = ingredients_url(
            BASE,
            &["chicken".into(), " green beans ".into(), String::new()],
            7,
            "k3y",
        );
        assert_eq!(
            url,
            "https://api.spoonacular.com/recipes/findByIngredients?ingredients=chicken%2Cgreen%20beans&number=7&apiKey=k3y"
        );
    }

    #[test]
    fn cuisine_url_adds_type_only_when_given() {
        assert_eq!(
            cuisine_url(BASE, "italian", None, 5, "k"),
            "https://api.spoonacular.com/recipes/complexSearch?cuisine=italian&number=5&apiKey=k"
        );
        assert_eq!(
            cuisine_url(BASE, "italian", Some(""), 5, "k"),
            cuisine_url(BASE, "italian", None, 5, "k")
        );
        assert_eq!(
            cuisine_url(BASE, "thai", Some("main course"), 3, "k"),
            "https://api.spoonacular.com/recipes/complexSearch?cuisine=thai&number=3&type=main%20course&apiKey=k"
        );
    }

    #[test]
    fn details_url_requests_nutrition() {
        assert_eq!(
            details_url(BASE, 716_429, "k"),
            "https://api.spoonacular.com/recipes/716429/information?includeNutrition=true&apiKey=k"
        );
    }

    #[test]
    fn redact_hides_the_key() {
        let url = details_url(BASE, 1, "secret");
        let shown = redact(&url);
        assert!(!shown.contains("secret"));
        assert!(shown.ends_with("apiKey=***"));
        assert_eq!(redact("https://x/y"), "https://x/y");
    }
}
