//! Application state and the controllers that act on it.
//!
//! Every user action maps to one method here: read input, update state, maybe
//! make one API call, and hand back what should be shown.

use log::{error, info};

use crate::api::RecipeApi;
use crate::config::AppConfig;
use crate::error::ForkifyError;
use crate::likes::Likes;
use crate::list::{ShoppingList, ShoppingListItem};
use crate::quantity::Quantity;
use crate::recipe::{Recipe, ServingsChange};
use crate::route::recipe_id_from_fragment;
use crate::search::{ResultsPage, Search};
use crate::storage::Storage;

pub struct Session<S: Storage> {
    config: AppConfig,
    api: Box<dyn RecipeApi>,
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: ShoppingList,
    pub likes: Likes<S>,
}

impl<S: Storage> Session<S> {
    pub fn new(config: AppConfig, api: Box<dyn RecipeApi>, likes: Likes<S>) -> Self {
        Session {
            config,
            api,
            search: None,
            recipe: None,
            list: ShoppingList::new(),
            likes,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run a new search and return its first page. Blank queries do nothing.
    pub async fn control_search(
        &mut self,
        query: &str,
    ) -> Result<Option<ResultsPage<'_>>, ForkifyError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let mut search = Search::new(query);
        if let Err(e) = search.get_results(self.api.as_ref()).await {
            error!("search for '{}' failed: {}", query, e);
            return Err(e);
        }

        let per_page = self.config.search.results_per_page;
        Ok(Some(self.search.insert(search).page(1, per_page)))
    }

    /// Another page of the current search
    pub fn goto_page(&self, page: usize) -> Option<ResultsPage<'_>> {
        let per_page = self.config.search.results_per_page;
        self.search.as_ref().map(|s| s.page(page, per_page))
    }

    /// Load the recipe selected by a route fragment. An empty fragment does nothing.
    pub async fn control_recipe(
        &mut self,
        fragment: &str,
    ) -> Result<Option<&Recipe>, ForkifyError> {
        let Some(id) = recipe_id_from_fragment(fragment) else {
            return Ok(None);
        };

        let data = match self.api.get(id).await {
            Ok(data) => data,
            Err(e) => {
                error!("loading recipe {} failed: {}", id, e);
                return Err(e);
            }
        };

        let recipe = Recipe::from_data(data, &self.config.recipe);
        Ok(Some(&*self.recipe.insert(recipe)))
    }

    /// Whether the current recipe is among the liked ones
    pub fn is_current_liked(&self) -> bool {
        self.recipe
            .as_ref()
            .is_some_and(|r| self.likes.is_liked(&r.id))
    }

    /// Returns `false` when servings would drop below 1
    pub fn update_servings(&mut self, change: ServingsChange) -> Result<bool, ForkifyError> {
        let recipe = self.recipe.as_mut().ok_or(ForkifyError::NoRecipeSelected)?;
        Ok(recipe.update_servings(change))
    }

    /// Add the current recipe's ingredients to the shopping list
    pub fn control_list(&mut self) -> Result<&[ShoppingListItem], ForkifyError> {
        let recipe = self.recipe.as_ref().ok_or(ForkifyError::NoRecipeSelected)?;
        Ok(self.list.add_ingredients(&recipe.ingredients))
    }

    pub fn delete_list_item(&mut self, id: &str) -> bool {
        self.list.delete_item(id)
    }

    pub fn update_list_count(&mut self, id: &str, quantity: Option<Quantity>) -> bool {
        self.list.update_count(id, quantity)
    }

    /// Toggle the like on the current recipe; returns whether it is now liked
    pub fn control_like(&mut self) -> Result<bool, ForkifyError> {
        let recipe = self.recipe.as_ref().ok_or(ForkifyError::NoRecipeSelected)?;

        if self.likes.is_liked(&recipe.id) {
            self.likes.delete_like(&recipe.id)?;
            info!("unliked recipe {}", recipe.id);
            Ok(false)
        } else {
            self.likes.add_like(recipe.to_liked())?;
            info!("liked recipe {}", recipe.id);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecipeData, RecipeSummary};
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;

    struct StubApi;

    #[async_trait]
    impl RecipeApi for StubApi {
        async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, ForkifyError> {
            if query == "fail" {
                return Err(ForkifyError::Api("boom".to_string()));
            }
            Ok((0..12)
                .map(|i| RecipeSummary {
                    id: i.to_string(),
                    title: format!("{} {}", query, i),
                    author: "Stub".to_string(),
                    image: String::new(),
                    source_url: String::new(),
                    social_rank: None,
                })
                .collect())
        }

        async fn get(&self, id: &str) -> Result<RecipeData, ForkifyError> {
            if id == "missing" {
                return Err(ForkifyError::Api("not found".to_string()));
            }
            Ok(RecipeData {
                id: id.to_string(),
                title: "Stub Soup".to_string(),
                author: "Stub".to_string(),
                image: "soup.jpg".to_string(),
                source_url: String::new(),
                ingredients: vec!["2 cups stock".to_string(), "1 onion".to_string()],
            })
        }
    }

    fn session() -> Session<MemoryStorage> {
        Session::new(
            AppConfig::default(),
            Box::new(StubApi),
            Likes::new(MemoryStorage::new()),
        )
    }

    #[tokio::test]
    async fn test_control_search_pages() {
        let mut session = session();
        let first = session.control_search("soup").await.unwrap().unwrap();
        assert_eq!(first.recipes.len(), 10);
        assert_eq!(first.pagination.next, Some(2));

        let second = session.goto_page(2).unwrap();
        assert_eq!(second.recipes.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_query_is_noop() {
        let mut session = session();
        assert!(session.control_search("   ").await.unwrap().is_none());
        assert!(session.search.is_none());
        assert!(session.goto_page(1).is_none());
    }

    #[tokio::test]
    async fn test_failed_search_keeps_previous() {
        let mut session = session();
        session.control_search("soup").await.unwrap();
        assert!(session.control_search("fail").await.is_err());
        assert_eq!(session.search.as_ref().unwrap().query, "soup");
    }

    #[tokio::test]
    async fn test_control_recipe() {
        let mut session = session();
        assert!(session.control_recipe("#").await.unwrap().is_none());

        let recipe = session.control_recipe("#42").await.unwrap().unwrap();
        assert_eq!(recipe.id, "42");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.time, 15);

        assert!(session.control_recipe("#missing").await.is_err());
        assert_eq!(session.recipe.as_ref().unwrap().id, "42");
    }

    #[tokio::test]
    async fn test_servings_list_and_like() {
        let mut session = session();
        assert!(matches!(
            session.control_like(),
            Err(ForkifyError::NoRecipeSelected)
        ));

        session.control_recipe("#42").await.unwrap();
        assert!(session.update_servings(ServingsChange::Decrease).unwrap());
        assert_eq!(session.recipe.as_ref().unwrap().servings, 3);

        let added = session.control_list().unwrap().to_vec();
        assert_eq!(added.len(), 2);
        assert_eq!(added[0].quantity, Quantity::new(3, 2));

        assert!(session.update_list_count(&added[0].id, Some(Quantity::whole(1))));
        assert!(session.delete_list_item(&added[1].id));
        assert_eq!(session.list.len(), 1);

        assert!(session.control_like().unwrap());
        assert!(session.is_current_liked());
        assert!(!session.control_like().unwrap());
        assert!(!session.is_current_liked());
        assert_eq!(session.likes.number_of_likes(), 0);
    }
}
