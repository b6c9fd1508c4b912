//! 渲染模块：把食谱列表转换为 HTML 片段或终端文本。
//!
//! # Render Module
//!
//! String templating for the recipe container. Every value that came from
//! the user or the server passes through [`escape_html`] before it is
//! interpolated.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`render_recipe_card`] | One `recipe-card` block |
//! | [`render_recipes`] | All cards, in response order |
//! | [`render_error`] | Error card |
//! | [`render_skeleton_cards`] | Loading placeholders |
//! | [`render_text`] | Plain-text listing for terminals |

mod cards;
mod escape;
mod text;

pub use cards::{
    cook_time_label, render_error, render_recipe_card, render_recipes, render_skeleton_cards,
    DEFAULT_SKELETON_CARDS, NO_COOK_TIME, UNTITLED,
};
pub use escape::escape_html;
pub use text::render_text;
