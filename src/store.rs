use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::RecipeError;
use crate::model::Recipe;

/// The recipe collection, loaded once and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        RecipeStore { recipes }
    }

    /// Read and parse the JSON data file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecipeError> {
        let path = path.as_ref();
        debug!("Loading recipes from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| RecipeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(|source| RecipeError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded {} recipes from {}", recipes.len(), path.display());
        Ok(RecipeStore::new(recipes))
    }

    pub fn from_json_str(json: &str) -> Result<Self, RecipeError> {
        Ok(RecipeStore::new(serde_json::from_str(json)?))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
