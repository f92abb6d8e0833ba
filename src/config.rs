use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Search result presentation
    #[serde(default)]
    pub search: SearchConfig,
    /// Derived recipe metrics
    #[serde(default)]
    pub recipe: RecipeConfig,
    /// Where liked recipes are persisted
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Configuration for the remote recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Configuration for search result pages
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Number of hits shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Maximum title length before it is shortened with " ..."
    #[serde(default = "default_title_limit")]
    pub title_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            results_per_page: default_results_per_page(),
            title_limit: default_title_limit(),
        }
    }
}

/// Configuration for servings and preparation time estimates
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    /// Servings assumed for a freshly loaded recipe
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Minutes added per started group of ingredients
    #[serde(default = "default_minutes_per_period")]
    pub minutes_per_period: u32,
    /// Ingredients per group
    #[serde(default = "default_ingredients_per_period")]
    pub ingredients_per_period: u32,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
            minutes_per_period: default_minutes_per_period(),
            ingredients_per_period: default_ingredients_per_period(),
        }
    }
}

/// Configuration for the likes store
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Explicit path of the storage file; falls back to the platform data dir
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the storage file location
    pub fn resolve_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("forkify")
                .join("storage.json")
        })
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_results_per_page() -> usize {
    10
}

fn default_title_limit() -> usize {
    17
}

fn default_servings() -> u32 {
    4
}

fn default_minutes_per_period() -> u32 {
    15
}

fn default_ingredients_per_period() -> u32 {
    3
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKIFY__ prefix
    /// 2. forkify.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKIFY__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("forkify").required(false))
        // Use double underscore for nested: FORKIFY__SEARCH__RESULTS_PER_PAGE
        .add_source(
            Environment::with_prefix("FORKIFY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://forkify-api.herokuapp.com/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.search.results_per_page, 10);
        assert_eq!(config.search.title_limit, 17);
        assert_eq!(config.recipe.default_servings, 4);
        assert_eq!(config.recipe.minutes_per_period, 15);
        assert_eq!(config.recipe.ingredients_per_period, 3);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(
                "[search]\nresults_per_page = 5\n[storage]\npath = \"/tmp/likes.json\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.search.results_per_page, 5);
        assert_eq!(config.search.title_limit, 17);
        assert_eq!(config.recipe.default_servings, 4);
        assert_eq!(
            config.storage.resolve_path(),
            PathBuf::from("/tmp/likes.json")
        );
    }

    #[test]
    fn test_empty_sources_deserialize() {
        let config: AppConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.api.timeout, 30);
    }

    #[test]
    fn test_default_storage_path_is_under_forkify_dir() {
        let path = StorageConfig::default().resolve_path();
        assert!(path.ends_with("forkify/storage.json"));
    }
}
