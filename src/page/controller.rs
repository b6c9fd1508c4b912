use super::View;
use crate::client::{RecipeOutcome, RecipeSource};
use crate::form::{FormSource, FormState};
use crate::render::{render_error, render_recipes, render_skeleton_cards, DEFAULT_SKELETON_CARDS};
use crate::types::Recipe;
use tracing::debug;

/// Shown when a 2xx reply carried neither recipes nor an error.
pub const NO_RECIPES_MESSAGE: &str = "No recipes returned.";

/// Where the page ended up after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Cards were rendered for these recipes.
    Rendered(Vec<Recipe>),
    /// The server answered with an empty list; the no-results notice is shown.
    Empty,
    /// An error card with this message is shown.
    Failed(String),
}

/// Drives one search: form in, cards (or an error) out.
pub struct RecipePage<S> {
    source: S,
    skeleton_cards: usize,
}

impl<S: RecipeSource> RecipePage<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            skeleton_cards: DEFAULT_SKELETON_CARDS,
        }
    }

    pub fn with_skeleton_cards(mut self, count: usize) -> Self {
        self.skeleton_cards = count;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read the form, query the source and render the result into `page`.
    pub async fn submit<P>(&self, page: &mut P) -> PageState
    where
        P: FormSource + View + ?Sized,
    {
        let query = match FormState::read(&*page).into_query() {
            Ok(query) => query,
            Err(e) => return show_error(page, e.user_message()),
        };

        page.set_container_html(render_skeleton_cards(self.skeleton_cards));
        page.set_no_results_visible(false);

        debug!(
            ingredients = %query.ingredients,
            filters = ?query.filters.active(),
            "submitting recipe search"
        );
        match self.source.fetch_recipes(&query).await {
            Ok(RecipeOutcome::Recipes(recipes)) => show_recipes(page, recipes),
            Ok(RecipeOutcome::ServerError(message)) => show_error(page, message),
            Ok(RecipeOutcome::NoRecipes) => show_error(page, NO_RECIPES_MESSAGE.to_string()),
            Err(e) => show_error(page, e.user_message()),
        }
    }
}

fn show_recipes<P: View + ?Sized>(page: &mut P, recipes: Vec<Recipe>) -> PageState {
    if recipes.is_empty() {
        page.set_container_html(String::new());
        page.set_no_results_visible(true);
        return PageState::Empty;
    }
    page.set_container_html(render_recipes(&recipes));
    page.set_no_results_visible(false);
    PageState::Rendered(recipes)
}

fn show_error<P: View + ?Sized>(page: &mut P, message: String) -> PageState {
    page.set_container_html(render_error(&message));
    page.set_no_results_visible(false);
    PageState::Failed(message)
}
