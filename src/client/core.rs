use crate::client::builder::RecipeClientBuilder;
use crate::transport::HttpTransport;
use crate::types::{Recipe, RecipeQuery, RecipesResponse};
use crate::{Error, Result};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// What a successful (2xx) exchange told us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeOutcome {
    /// The server sent a recipe list. It may be empty.
    Recipes(Vec<Recipe>),
    /// No list, but the server explained why.
    ServerError(String),
    /// Neither a list nor an explanation.
    NoRecipes,
}

impl RecipeOutcome {
    /// Interpret a 2xx response body.
    ///
    /// Bodies that are valid JSON but not an object carry no recipes.
    pub fn from_body(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Ok(RecipeOutcome::NoRecipes);
        }
        let response = RecipesResponse::deserialize(value)?;
        Ok(match (response.recipes, response.error) {
            (Some(recipes), _) => RecipeOutcome::Recipes(recipes),
            (None, Some(message)) => RecipeOutcome::ServerError(message),
            (None, None) => RecipeOutcome::NoRecipes,
        })
    }
}

/// HTTP client for `POST /get_recipes`.
pub struct RecipeClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) api_url: String,
}

impl RecipeClient {
    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::new()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        self.transport.timeout()
    }

    /// Send one query and classify the reply.
    pub async fn get_recipes(&self, query: &RecipeQuery) -> Result<RecipeOutcome> {
        let reply = match self.transport.post_json(&self.api_url, query).await {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_timeout() {
                    warn!(url = %self.api_url, "recipe request timed out");
                } else {
                    error!(url = %self.api_url, error = %e, "recipe request failed");
                }
                return Err(e);
            }
        };

        if !reply.is_success() {
            warn!(status = reply.status, "recipe endpoint returned an error status");
            return Err(Error::Remote {
                status: reply.status,
                body: reply.body,
            });
        }

        let outcome = RecipeOutcome::from_body(&reply.body)?;
        match &outcome {
            RecipeOutcome::Recipes(list) => info!(count = list.len(), "recipes received"),
            RecipeOutcome::ServerError(message) => warn!(%message, "server reported an error"),
            RecipeOutcome::NoRecipes => info!("response carried no recipes"),
        }
        Ok(outcome)
    }
}
