use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single cake recipe as stored in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Absent in some source records; such recipes are never matched by name
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absent in some source records; such recipes are never matched by author
    #[serde(rename = "Author", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Always a proper list after loading; absent or malformed source values become empty
    #[serde(
        rename = "Ingredients",
        default,
        deserialize_with = "deserialize_ingredients"
    )]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Recipe {
            name: Some(name.into()),
            author: Some(author.into()),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// Label used when listing recipes
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

fn deserialize_ingredients<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_ingredients(value))
}

fn normalize_ingredients(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                other => {
                    debug!("Skipping non-text ingredient: {}", other);
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            debug!("Ingredients is not a list, treating as empty: {}", other);
            Vec::new()
        }
    }
}
