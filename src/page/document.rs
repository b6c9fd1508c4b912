use super::View;
use crate::form::{FormSource, INGREDIENT_INPUT_ID};
use crate::types::{DietaryFilters, DietaryFlag};
use std::collections::{HashMap, HashSet};

/// Id of the element recipe cards are rendered into.
pub const CONTAINER_ID: &str = "recipeContainer";

/// Id of the empty-state notice.
pub const NO_RESULTS_ID: &str = "noResults";

/// In-memory stand-in for the page's DOM.
///
/// Holds text inputs and checkboxes by element id, plus the two outputs the
/// submit flow writes. A fresh document has the no-results notice hidden.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inputs: HashMap<String, String>,
    checked: HashSet<String>,
    container_html: String,
    no_results_visible: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the standard ingredient input and filter checkboxes filled in.
    pub fn with_search(ingredients: impl Into<String>, filters: DietaryFilters) -> Self {
        let mut doc = Self::new();
        doc.set_input(INGREDIENT_INPUT_ID, ingredients);
        for flag in DietaryFlag::ALL {
            doc.set_checked(flag.element_id(), filters.get(flag));
        }
        doc
    }

    pub fn set_input(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(id.into(), value.into());
    }

    pub fn set_checked(&mut self, id: impl Into<String>, checked: bool) {
        let id = id.into();
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    pub fn container_html(&self) -> &str {
        &self.container_html
    }

    pub fn no_results_visible(&self) -> bool {
        self.no_results_visible
    }
}

impl FormSource for Document {
    fn text_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }
}

impl View for Document {
    fn set_container_html(&mut self, html: String) {
        self.container_html = html;
    }

    fn set_no_results_visible(&mut self, visible: bool) {
        self.no_results_visible = visible;
    }
}
