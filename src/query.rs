//! Pure lookups over a slice of recipes.
//!
//! Nothing here prints or mutates; results borrow from the input and keep
//! its order. See [`crate::report`] for the user-facing wrappers.

use std::collections::HashSet;

use crate::model::Recipe;

/// Distinct authors, in order of first appearance; recipes without one are skipped
pub fn unique_authors(recipes: &[Recipe]) -> Vec<&str> {
    dedup_first_seen(recipes.iter().filter_map(|recipe| recipe.author.as_deref()))
}

/// Recipes whose author equals `author` exactly (case-sensitive, untrimmed)
pub fn recipes_by_author<'a>(recipes: &'a [Recipe], author: &str) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.author.as_deref() == Some(author))
        .collect()
}

/// Recipes with at least one ingredient containing `ingredient`
pub fn recipes_by_ingredient<'a>(recipes: &'a [Recipe], ingredient: &str) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.ingredients.iter().any(|item| item.contains(ingredient)))
        .collect()
}

/// First recipe whose name contains `name`
pub fn find_by_name<'a>(recipes: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    recipes.iter().find(|recipe| {
        recipe
            .name
            .as_deref()
            .is_some_and(|recipe_name| recipe_name.contains(name))
    })
}

/// Every ingredient across all recipes, each once, in order of first appearance
pub fn all_ingredients(recipes: &[Recipe]) -> Vec<&str> {
    dedup_first_seen(
        recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter().map(String::as_str)),
    )
}

fn dedup_first_seen<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}
