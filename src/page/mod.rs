//! The search page: view seam, in-memory document and submit flow.

mod controller;
mod document;

pub use controller::{PageState, RecipePage, NO_RECIPES_MESSAGE};
pub use document::{Document, CONTAINER_ID, NO_RESULTS_ID};

/// Write access to the parts of the page the flow updates.
pub trait View {
    /// Replace the contents of the recipe container.
    fn set_container_html(&mut self, html: String);

    /// Show or hide the "no results" notice.
    fn set_no_results_visible(&mut self, visible: bool);
}
