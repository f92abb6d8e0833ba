use thiserror::Error;

/// Errors that can occur while searching, loading or storing recipes
#[derive(Error, Debug)]
pub enum ForkifyError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch from recipe API: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered, but not with what we asked for
    #[error("Recipe API error: {0}")]
    Api(String),

    /// Reading or writing persisted data failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Persisted or received JSON could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An operation needs a current recipe but none is loaded
    #[error("No recipe selected")]
    NoRecipeSelected,
}
