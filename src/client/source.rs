use super::core::{RecipeClient, RecipeOutcome};
use crate::types::RecipeQuery;
use crate::Result;
use async_trait::async_trait;

/// Anything that can answer a recipe query.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn fetch_recipes(&self, query: &RecipeQuery) -> Result<RecipeOutcome>;
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn fetch_recipes(&self, query: &RecipeQuery) -> Result<RecipeOutcome> {
        self.get_recipes(query).await
    }
}

#[async_trait]
impl<S: RecipeSource + ?Sized> RecipeSource for std::sync::Arc<S> {
    async fn fetch_recipes(&self, query: &RecipeQuery) -> Result<RecipeOutcome> {
        (**self).fetch_recipes(query).await
    }
}
