//! Client for the recipe-recommendation endpoint.
//!
//! Keep the public surface small: build a [`RecipeClient`], call
//! [`RecipeClient::get_recipes`]. The page controller only sees the
//! [`RecipeSource`] trait, so tests and other hosts can substitute their own.

pub mod builder;
pub mod core;
mod source;

pub use builder::RecipeClientBuilder;
pub use core::{RecipeClient, RecipeOutcome};
pub use source::RecipeSource;
