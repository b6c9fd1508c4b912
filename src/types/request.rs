//! Request body for the recommendation endpoint.

use super::filters::DietaryFilters;
use serde::{Deserialize, Serialize};

/// `{ "ingredients": "...", "filters": { ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeQuery {
    pub ingredients: String,
    #[serde(default)]
    pub filters: DietaryFilters,
}

impl RecipeQuery {
    pub fn new(ingredients: impl Into<String>, filters: DietaryFilters) -> Self {
        Self {
            ingredients: ingredients.into(),
            filters,
        }
    }
}
