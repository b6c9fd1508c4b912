//! Reading the search form.
//!
//! The host page is only reached through [`FormSource`], so the same code
//! reads a browser DOM binding, the in-memory [`crate::page::Document`], or
//! a test double.

use crate::types::{DietaryFilters, DietaryFlag, RecipeQuery};
use crate::{Error, ErrorContext, Result};

/// Id of the free-text ingredient input.
pub const INGREDIENT_INPUT_ID: &str = "ingredientInput";

/// Message shown when the ingredient input is blank.
pub const EMPTY_INGREDIENTS_MESSAGE: &str = "Please enter some ingredients.";

/// Read access to form controls by element id.
pub trait FormSource {
    /// Current value of a text input, `None` if no such element exists.
    fn text_value(&self, id: &str) -> Option<String>;

    /// Whether a checkbox is ticked. Missing elements read as unticked.
    fn is_checked(&self, id: &str) -> bool;
}

/// Snapshot of the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub ingredients: String,
    pub filters: DietaryFilters,
}

impl FormState {
    pub fn read<F: FormSource + ?Sized>(source: &F) -> Self {
        let ingredients = source
            .text_value(INGREDIENT_INPUT_ID)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        let mut filters = DietaryFilters::default();
        for flag in DietaryFlag::ALL {
            filters.set(flag, source.is_checked(flag.element_id()));
        }

        Self {
            ingredients,
            filters,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Turn the snapshot into a request body, rejecting blank ingredients.
    pub fn into_query(self) -> Result<RecipeQuery> {
        if self.is_empty() {
            return Err(Error::validation_with_context(
                EMPTY_INGREDIENTS_MESSAGE,
                ErrorContext::new()
                    .with_field_path(INGREDIENT_INPUT_ID)
                    .with_source("form"),
            ));
        }
        Ok(RecipeQuery::new(self.ingredients, self.filters))
    }
}
