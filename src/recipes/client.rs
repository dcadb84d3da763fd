//! Spoonacular client
//!
//! Random/trending, text search with filters, and ingredient search.
//! Ingredient search fans out one detail request per result; a failed
//! detail fetch keeps the stub from the ingredient listing.

use futures::future::join_all;
use serde::Deserialize;

use super::{Recipe, SearchFilters};
use crate::config::RecipeConfig;
use crate::fetch::{FetchError, REQUEST_TIMEOUT};

/// How many results the listing endpoints request
const PAGE_SIZE: u32 = 12;
/// How many ingredient-search hits get a detail fetch
const DETAIL_FAN_OUT: usize = 8;

#[derive(Debug, Deserialize)]
struct RandomPayload {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Vec<Recipe>,
}

/// HTTP client for the recipe endpoints
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RecipeClient {
    /// Build a client from configuration; None means demo mode
    pub fn from_config(config: &RecipeConfig, override_key: Option<String>) -> Option<Self> {
        let api_key = override_key.or_else(|| config.api_key.clone())?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .ok()?;
        Some(Self {
            http,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16()));
        }

        response.json().await.map_err(|_| FetchError::InvalidShape)
    }

    /// Fetch a page of random recipes (the trending view)
    pub async fn random(&self, number: u32) -> Result<Vec<Recipe>, FetchError> {
        let payload: RandomPayload = self
            .get_json("random", &[("number", number.to_string())])
            .await?;
        Ok(payload.recipes)
    }

    /// Text search with optional filters, requesting full recipe
    /// information per result
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Recipe>, FetchError> {
        let mut params = vec![
            ("query", query.to_string()),
            ("number", PAGE_SIZE.to_string()),
            ("addRecipeInformation", "true".to_string()),
        ];
        if let Some(diet) = &filters.diet {
            params.push(("diet", diet.clone()));
        }
        if let Some(cuisine) = &filters.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        if let Some(dish_type) = &filters.dish_type {
            params.push(("type", dish_type.clone()));
        }
        if let Some(max_ready_time) = filters.max_ready_time {
            params.push(("maxReadyTime", max_ready_time.to_string()));
        }
        if let Some(min_health_score) = filters.min_health_score {
            params.push(("minHealthScore", min_health_score.to_string()));
        }

        let payload: SearchPayload = self.get_json("complexSearch", &params).await?;
        Ok(payload.results)
    }

    /// Ingredient search: list matching recipes, then fetch details for
    /// the first few. Detail failures are non-fatal.
    pub async fn by_ingredients(&self, ingredients: &[String]) -> Result<Vec<Recipe>, FetchError> {
        let stubs: Vec<Recipe> = self
            .get_json(
                "findByIngredients",
                &[
                    ("ingredients", ingredients.join(",")),
                    ("number", PAGE_SIZE.to_string()),
                ],
            )
            .await?;

        let detail_fetches = stubs
            .into_iter()
            .take(DETAIL_FAN_OUT)
            .map(|stub| async move {
                match self.detail(stub.id).await {
                    Ok(full) => full,
                    Err(_) => stub,
                }
            });

        Ok(join_all(detail_fetches).await)
    }

    async fn detail(&self, id: i64) -> Result<Recipe, FetchError> {
        self.get_json(&format!("{}/information", id), &[]).await
    }
}
