use super::cards::{cook_time_label, UNTITLED};
use crate::types::Recipe;
use std::fmt::Write;

/// Numbered plain-text listing, one block per recipe.
pub fn render_text(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for (i, recipe) in recipes.iter().enumerate() {
        let title = if recipe.title.is_empty() {
            UNTITLED
        } else {
            recipe.title.as_str()
        };
        let _ = writeln!(out, "{}. {} ({})", i + 1, title, cook_time_label(recipe));
        if !recipe.description.is_empty() {
            let _ = writeln!(out, "   {}", recipe.description);
        }
        if !recipe.ingredients.is_empty() {
            let _ = writeln!(out, "   Uses: {}", recipe.ingredients.join(", "));
        }
    }
    out
}
