pub mod api;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod likes;
pub mod list;
pub mod model;
pub mod quantity;
pub mod recipe;
pub mod route;
pub mod search;
pub mod session;
pub mod storage;
pub mod unit;

pub use api::{ForkifyClient, RecipeApi};
pub use config::{load_config, AppConfig};
pub use error::ForkifyError;
pub use ingredient::{parse_ingredients, Ingredient};
pub use likes::Likes;
pub use list::{ShoppingList, ShoppingListItem};
pub use model::{LikedRecipe, RecipeData, RecipeSummary};
pub use quantity::Quantity;
pub use recipe::{Recipe, ServingsChange};
pub use search::{limit_title, Pagination, ResultsPage, Search};
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use unit::Unit;

/// Open a session against the configured API, restoring likes from file storage
pub fn open_session(config: AppConfig) -> Result<Session<FileStorage>, ForkifyError> {
    let client = ForkifyClient::new(&config.api)?;
    let storage = FileStorage::new(config.storage.resolve_path());
    let likes = Likes::restore(storage)?;
    Ok(Session::new(config, Box::new(client), likes))
}

/// Search the configured API in one call
pub async fn search_recipes(query: &str) -> Result<Vec<RecipeSummary>, ForkifyError> {
    let config = AppConfig::load()?;
    let client = ForkifyClient::new(&config.api)?;
    client.search(query).await
}

/// Load one recipe with parsed ingredients and derived metrics
pub async fn fetch_recipe(id: &str) -> Result<Recipe, ForkifyError> {
    let config = AppConfig::load()?;
    let client = ForkifyClient::new(&config.api)?;
    let data = client.get(id).await?;
    Ok(Recipe::from_data(data, &config.recipe))
}
