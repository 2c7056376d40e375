pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod report;
pub mod session;
pub mod store;

pub use config::AppConfig;
pub use error::RecipeError;
pub use model::Recipe;
pub use session::{MenuChoice, Session};
pub use store::RecipeStore;
