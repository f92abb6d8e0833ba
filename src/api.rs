use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::ForkifyError;
use crate::model::{RecipeData, RecipeSummary};

/// Remote source of recipes
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Find recipes matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, ForkifyError>;

    /// Load one recipe with its ingredient lines
    async fn get(&self, id: &str) -> Result<RecipeData, ForkifyError>;
}

/// Client for the forkify recipe API
pub struct ForkifyClient {
    client: Client,
    base_url: String,
}

impl ForkifyClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ForkifyError> {
        Self::with_base_url(config.base_url.clone(), Some(config.timeout()))
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ForkifyError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("forkify/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ForkifyError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("recipe API returned {} for {}", status, url);
            return Err(ForkifyError::Api(api_error_message(&body).unwrap_or_else(
                || format!("unexpected status {}", status),
            )));
        }
        if let Some(message) = api_error_message(&body) {
            return Err(ForkifyError::Api(message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeApi for ForkifyClient {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, ForkifyError> {
        let response: SearchResponse = self.get_json("search", &[("q", query)]).await?;
        debug!(
            "search '{}' returned {} of {} recipes",
            query,
            response.recipes.len(),
            response.count.unwrap_or(response.recipes.len())
        );
        Ok(response.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    async fn get(&self, id: &str) -> Result<RecipeData, ForkifyError> {
        let response: GetResponse = self.get_json("get", &[("rId", id)]).await?;
        Ok(response.recipe.into())
    }
}

/// `{"error": "..."}` bodies carry the API's own failure message
fn api_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.error)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    count: Option<usize>,
    #[serde(default)]
    recipes: Vec<ApiRecipeSummary>,
}

#[derive(Debug, Deserialize)]
struct ApiRecipeSummary {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    social_rank: Option<f64>,
}

impl From<ApiRecipeSummary> for RecipeSummary {
    fn from(api: ApiRecipeSummary) -> Self {
        RecipeSummary {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher,
            image: api.image_url,
            source_url: api.source_url,
            social_rank: api.social_rank,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    recipe: ApiRecipe,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl From<ApiRecipe> for RecipeData {
    fn from(api: ApiRecipe) -> Self {
        RecipeData {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher,
            image: api.image_url,
            source_url: api.source_url,
            ingredients: api.ingredients,
        }
    }
}
