//! User-facing wrappers around [`crate::query`].
//!
//! Each function writes its result, or a not-found message, to `out` and
//! hands the result back to the caller.

use std::io::Write;

use crate::error::RecipeError;
use crate::model::Recipe;
use crate::query;

/// Print one recipe name per line
pub fn recipe_names<W: Write>(out: &mut W, recipes: &[&Recipe]) -> Result<(), RecipeError> {
    if recipes.is_empty() {
        writeln!(out, "No recipes found.")?;
        return Ok(());
    }
    for recipe in recipes {
        writeln!(out, "{}", recipe.display_name())?;
    }
    Ok(())
}

/// Print the distinct authors as a single list
pub fn authors<'a, W: Write>(
    out: &mut W,
    recipes: &'a [Recipe],
) -> Result<Vec<&'a str>, RecipeError> {
    let authors = query::unique_authors(recipes);
    writeln!(out, "{}", serde_json::to_string(&authors)?)?;
    Ok(authors)
}

/// Print the names of recipes written by `author`
pub fn recipes_by_author<'a, W: Write>(
    out: &mut W,
    recipes: &'a [Recipe],
    author: &str,
) -> Result<Vec<&'a Recipe>, RecipeError> {
    let found = query::recipes_by_author(recipes, author);
    if found.is_empty() {
        writeln!(out, "No recipes found for the author \"{}\".", author)?;
    } else {
        recipe_names(out, &found)?;
    }
    Ok(found)
}

/// Print the names of recipes using `ingredient`
pub fn recipes_by_ingredient<'a, W: Write>(
    out: &mut W,
    recipes: &'a [Recipe],
    ingredient: &str,
) -> Result<Vec<&'a Recipe>, RecipeError> {
    let found = query::recipes_by_ingredient(recipes, ingredient);
    if found.is_empty() {
        writeln!(out, "No recipes found with the ingredient \"{}\".", ingredient)?;
    } else {
        recipe_names(out, &found)?;
    }
    Ok(found)
}

/// Print the full record of the first recipe whose name contains `name`
pub fn recipe_by_name<'a, W: Write>(
    out: &mut W,
    recipes: &'a [Recipe],
    name: &str,
) -> Result<Option<&'a Recipe>, RecipeError> {
    let found = query::find_by_name(recipes, name);
    match found {
        Some(recipe) => writeln!(out, "{}", serde_json::to_string_pretty(recipe)?)?,
        None => writeln!(out, "No recipe found with the name \"{}\".", name)?,
    }
    Ok(found)
}

/// Print every distinct ingredient as a single list
pub fn ingredients<'a, W: Write>(
    out: &mut W,
    recipes: &'a [Recipe],
) -> Result<Vec<&'a str>, RecipeError> {
    let ingredients = query::all_ingredients(recipes);
    writeln!(out, "{}", serde_json::to_string(&ingredients)?)?;
    Ok(ingredients)
}
