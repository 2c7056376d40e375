use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying the recipe collection
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The data file could not be read
    #[error("Failed to read recipe data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid list of recipes
    #[error("Failed to parse recipe data from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory JSON could not be parsed or a recipe could not be rendered
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}
