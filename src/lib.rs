//! # recipe-finder
//!
//! 根据用户输入的食材与饮食偏好，向推荐服务请求食谱并渲染结果。
//!
//! Client side of an ingredient-driven recipe recommendation service.
//!
//! ## Overview
//!
//! A search collects a free-text ingredient list and five dietary checkboxes,
//! posts them as `{ingredients, filters}` to the recommendation endpoint
//! (`POST /get_recipes`) under a client-side timeout, and renders the reply
//! into the page: recipe cards, an empty-state notice, or an error card.
//! All text from the user or the server is HTML-escaped before it is
//! rendered.
//!
//! The page is reached through two small traits, [`form::FormSource`] and
//! [`page::View`], so the same flow drives a browser binding, the in-memory
//! [`page::Document`], or a test double.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recipe_finder::page::{Document, PageState, RecipePage};
//! use recipe_finder::types::DietaryFilters;
//! use recipe_finder::RecipeClient;
//!
//! #[tokio::main]
//! async fn main() -> recipe_finder::Result<()> {
//!     let client = RecipeClient::builder()
//!         .api_url("http://localhost:5000/get_recipes")
//!         .build()?;
//!
//!     let mut doc = Document::with_search("eggs, spinach", DietaryFilters::default().vegetarian(true));
//!     match RecipePage::new(client).submit(&mut doc).await {
//!         PageState::Rendered(recipes) => println!("{} recipes", recipes.len()),
//!         PageState::Empty => println!("nothing matched"),
//!         PageState::Failed(message) => eprintln!("{message}"),
//!     }
//!     println!("{}", doc.container_html());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Recipe record, dietary filters, request and response bodies |
//! | [`form`] | Reading the search form |
//! | [`client`] | HTTP client for the recommendation endpoint |
//! | [`render`] | HTML escaping and card templates |
//! | [`page`] | View seam, in-memory document and the submit flow |
//! | [`config`] | Layered configuration (defaults, YAML, environment) |

pub mod client;
pub mod config;
pub mod form;
pub mod page;
pub mod render;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{RecipeClient, RecipeClientBuilder, RecipeOutcome, RecipeSource};
pub use config::FinderConfig;
pub use page::{Document, PageState, RecipePage};
pub use types::{DietaryFilters, Recipe, RecipeQuery};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
