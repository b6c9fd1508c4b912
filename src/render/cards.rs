use super::escape::escape_html;
use crate::types::Recipe;

/// Placeholder count shown while a request is in flight.
pub const DEFAULT_SKELETON_CARDS: usize = 3;

/// Title used for recipes without one.
pub const UNTITLED: &str = "Untitled";

/// Meta text for recipes without a usable cook time.
pub const NO_COOK_TIME: &str = "—";

/// `"25 min"`, or [`NO_COOK_TIME`] when the time is missing or zero.
pub fn cook_time_label(recipe: &Recipe) -> String {
    match recipe.cook_time_minutes {
        Some(minutes) if minutes > 0 => format!("{} min", minutes),
        _ => NO_COOK_TIME.to_string(),
    }
}

pub fn render_recipe_card(recipe: &Recipe) -> String {
    let title = if recipe.title.is_empty() {
        UNTITLED
    } else {
        recipe.title.as_str()
    };

    format!(
        r#"<div class="recipe-card">
    <div class="title">{}</div>
    <div class="meta">
      <span>{}</span>
    </div>
    <div class="ingredients">{}</div>
    <div style="margin-top:auto;color:var(--muted);font-size:0.9rem">
      <strong>Uses:</strong> {}
    </div>
</div>
"#,
        escape_html(title),
        escape_html(&cook_time_label(recipe)),
        escape_html(&recipe.description),
        escape_html(&recipe.ingredients.join(", ")),
    )
}

pub fn render_recipes(recipes: &[Recipe]) -> String {
    recipes.iter().map(render_recipe_card).collect()
}

pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="recipe-card"><strong>Error:</strong> {}</div>"#,
        escape_html(message)
    )
}

pub fn render_skeleton_cards(count: usize) -> String {
    r#"<div class="recipe-card skeleton" style="height:120px"></div>"#.repeat(count)
}
