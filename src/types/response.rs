//! Response body of the recommendation endpoint.

use super::recipe::Recipe;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Either a recipe list or an error message, as sent by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipesResponse {
    #[serde(default, deserialize_with = "lenient_recipes")]
    pub recipes: Option<Vec<Recipe>>,
    #[serde(default, deserialize_with = "lenient_error")]
    pub error: Option<String>,
}

impl RecipesResponse {
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

// Non-object entries are skipped; a non-array value counts as absent.
fn lenient_recipes<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<Recipe>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };
    let recipes = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value::<Recipe>(item).ok())
        .collect();
    Ok(Some(recipes))
}

// Falsy values (null, false, 0, "") mean no error; other non-strings keep their JSON text.
fn lenient_error<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
