//! 类型模块：食谱查询与展示所用的数据类型。
//!
//! # Types Module
//!
//! Wire and display records exchanged with the recommendation endpoint.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Recipe`] | Display-only recipe record |
//! | [`DietaryFilters`] | Boolean dietary flags sent with a query |
//! | [`DietaryFlag`] | One dietary flag with its wire name, label and element id |
//! | [`RecipeQuery`] | Request body for `POST /get_recipes` |
//! | [`RecipesResponse`] | Response body: a recipe list or an error message |
//!
//! ## Example
//!
//! ```rust
//! use recipe_finder::types::{DietaryFilters, RecipeQuery};
//!
//! let query = RecipeQuery::new("eggs, spinach", DietaryFilters::default().vegetarian(true));
//! let body = serde_json::to_value(&query).unwrap();
//! assert_eq!(body["filters"]["vegetarian"], true);
//! ```

pub mod filters;
pub mod recipe;
pub mod request;
pub mod response;

pub use filters::{DietaryFilters, DietaryFlag};
pub use recipe::Recipe;
pub use request::RecipeQuery;
pub use response::RecipesResponse;
