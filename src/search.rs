use log::info;

use crate::api::RecipeApi;
use crate::error::ForkifyError;
use crate::model::RecipeSummary;

/// One recipe search and its results
#[derive(Debug, Clone)]
pub struct Search {
    pub query: String,
    pub results: Vec<RecipeSummary>,
}

/// Where a page sits among all result pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub pages: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// A slice of search results plus navigation
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage<'a> {
    pub recipes: &'a [RecipeSummary],
    pub pagination: Pagination,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Search {
            query: query.into(),
            results: Vec::new(),
        }
    }

    pub async fn get_results(&mut self, api: &dyn RecipeApi) -> Result<(), ForkifyError> {
        self.results = api.search(&self.query).await?;
        info!("{} results for '{}'", self.results.len(), self.query);
        Ok(())
    }

    /// Results on 1-based `page`; an out-of-range page is empty
    pub fn page(&self, page: usize, per_page: usize) -> ResultsPage<'_> {
        let pagination = paginate(self.results.len(), page, per_page);
        let per_page = per_page.max(1);
        let start = page.saturating_sub(1).saturating_mul(per_page);
        let recipes = if page == 0 || start >= self.results.len() {
            &self.results[..0]
        } else {
            let end = (start + per_page).min(self.results.len());
            &self.results[start..end]
        };
        ResultsPage {
            recipes,
            pagination,
        }
    }
}

pub fn paginate(total: usize, page: usize, per_page: usize) -> Pagination {
    let pages = total.div_ceil(per_page.max(1));
    Pagination {
        page,
        pages,
        prev: (page > 1 && page <= pages).then(|| page - 1),
        next: (page >= 1 && page < pages).then(|| page + 1),
    }
}

/// Shorten a title to whole words fitting in `limit` characters, marking the cut with " ..."
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in title.split_whitespace() {
        let word_len = word.chars().count();
        if length + word_len > limit {
            break;
        }
        length += word_len;
        kept.push(word);
    }
    if kept.is_empty() {
        let cut: String = title.chars().take(limit).collect();
        return format!("{} ...", cut.trim_end());
    }
    format!("{} ...", kept.join(" "))
}
