use std::io;

use cake_recipes::{AppConfig, RecipeError, RecipeStore, Session};
use log::debug;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load().map_err(RecipeError::from)?;
    debug!("{:#?}", config);

    let store = RecipeStore::load(&config.data_file)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&store, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
