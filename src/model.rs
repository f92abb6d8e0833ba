use serde::{Deserialize, Serialize};

/// One hit from a recipe search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_rank: Option<f64>,
}

/// Full recipe details as delivered by the API, before any derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub ingredients: Vec<String>,
}

/// The persisted subset of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "img")]
    pub image: String,
}
