//! HTTP client for the Spoonacular recipe API.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::urls::{cuisine_url, details_url, ingredients_url, redact};
use super::{RecipeApi, Result};
use crate::config::{ApiKey, Settings};
use crate::state::{ComplexSearchResponse, Recipe, RecipeSummary};

/// Connection establishment limit, independent of the overall request timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only client for the three recipe endpoints.
#[derive(Clone, Debug)]
pub struct SpoonacularClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// API base URL without trailing slash.
    base_url: String,
    /// Secret appended to every request.
    api_key: ApiKey,
    /// Result count for ingredient searches.
    ingredient_results: u32,
    /// Result count for cuisine searches.
    cuisine_results: u32,
}

impl SpoonacularClient {
    /// What: Build a client from settings and the API key.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend cannot be initialized.
    pub fn new(settings: &Settings, api_key: ApiKey) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(settings.request_timeout()))
            .timeout(settings.request_timeout())
            .user_agent(format!("recipe-finder/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
            api_key,
            ingredient_results: settings.ingredient_results,
            cuisine_results: settings.cuisine_results,
        })
    }

    /// What: GET `url` and decode the JSON body.
    ///
    /// # Errors
    /// - Network failures, non-2xx statuses and undecodable bodies.
    ///
    /// Details:
    /// - URLs are stripped from errors and logs so the API key never leaks.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %redact(url), "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response
            .json::<T>()
            .await
            .map_err(reqwest::Error::without_url)?;
        tracing::debug!(url = %redact(url), status = status.as_u16(), "response decoded");
        Ok(body)
    }
}

impl RecipeApi for SpoonacularClient {
    async fn search_recipes_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSummary>> {
        let url = ingredients_url(
            &self.base_url,
            ingredients,
            self.ingredient_results,
            self.api_key.expose(),
        );
        let found: Vec<RecipeSummary> = self.get_json(&url).await?;
        tracing::info!(count = found.len(), "ingredient search returned");
        Ok(found)
    }

    async fn find_recipes_by_cuisine(
        &self,
        cuisine: &str,
        meal_type: Option<&str>,
    ) -> Result<Vec<RecipeSummary>> {
        let url = cuisine_url(
            &self.base_url,
            cuisine,
            meal_type,
            self.cuisine_results,
            self.api_key.expose(),
        );
        let page: ComplexSearchResponse = self.get_json(&url).await?;
        tracing::info!(cuisine, ?meal_type, count = page.results.len(), "cuisine search returned");
        Ok(page.results)
    }

    async fn get_recipe_details(&self, id: u64) -> Result<Recipe> {
        let url = details_url(&self.base_url, id, self.api_key.expose());
        self.get_json(&url).await
    }
}
