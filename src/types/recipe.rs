//! Display-only recipe record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recipe as returned by the recommendation endpoint.
///
/// Decoding never fails on a JSON object: fields with an unexpected shape
/// fall back to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub cook_time_minutes: Option<u32>,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time_minutes = Some(minutes);
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            title: Value,
            #[serde(default)]
            description: Value,
            #[serde(default)]
            cook_time_minutes: Value,
            #[serde(default)]
            ingredients: Value,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Recipe {
            title: text_field(&raw.title),
            description: text_field(&raw.description),
            cook_time_minutes: minutes_field(&raw.cook_time_minutes),
            ingredients: ingredient_list(&raw.ingredients),
        })
    }
}

fn text_field(value: &Value) -> String {
    value.as_str().map(|s| s.trim().to_string()).unwrap_or_default()
}

fn minutes_field(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).ok()
            } else if n.is_i64() {
                None
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f.trunc() as u32)
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn ingredient_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}
