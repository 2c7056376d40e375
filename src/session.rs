use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use log::debug;

use crate::error::RecipeError;
use crate::report;
use crate::store::RecipeStore;

const MENU: &str = "\nRecipe Management System Menu:\n\
1. Show All Authors\n\
2. Show Recipe names by Author\n\
3. Show Recipe names by Ingredient\n\
4. Get Recipe by Name\n\
5. Get All Ingredients of Saved Recipes\n\
0. Exit";

const CHOICE_PROMPT: &str = "Enter a number (1-5) or 0 to exit: ";
const INVALID_INPUT: &str = "Invalid input. Please enter a number between 0 and 5.";

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAuthors,
    RecipesByAuthor,
    RecipesByIngredient,
    RecipeByName,
    AllIngredients,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse a menu line by its leading integer (decimal, or hex after `0x`); trailing text is ignored
    pub fn parse(input: &str) -> Self {
        match leading_integer(input) {
            Some(1) => MenuChoice::ShowAuthors,
            Some(2) => MenuChoice::RecipesByAuthor,
            Some(3) => MenuChoice::RecipesByIngredient,
            Some(4) => MenuChoice::RecipeByName,
            Some(5) => MenuChoice::AllIngredients,
            Some(0) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

/// The interactive menu loop over a loaded [`RecipeStore`]
pub struct Session<'a, R, W> {
    store: &'a RecipeStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a RecipeStore, input: R, output: W) -> Self {
        Session {
            store,
            input,
            output,
        }
    }

    /// Run until the user picks exit or the input is closed
    pub fn run(&mut self) -> Result<(), RecipeError> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                debug!("Input closed at menu prompt");
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            debug!("Menu input {:?} parsed as {:?}", line, choice);
            if self.dispatch(choice)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Handle a single menu choice
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, RecipeError> {
        let store = self.store;
        let recipes = store.recipes();
        match choice {
            MenuChoice::ShowAuthors => {
                writeln!(self.output, "All Authors:")?;
                report::authors(&mut self.output, recipes)?;
            }
            MenuChoice::RecipesByAuthor => {
                let Some(author) = self.prompt("Enter the author's name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                writeln!(self.output, "Recipes by {}:", author)?;
                report::recipes_by_author(&mut self.output, recipes, &author)?;
            }
            MenuChoice::RecipesByIngredient => {
                let Some(ingredient) = self.prompt("Enter an ingredient: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                writeln!(self.output, "Recipes with ingredient '{}':", ingredient)?;
                report::recipes_by_ingredient(&mut self.output, recipes, &ingredient)?;
            }
            MenuChoice::RecipeByName => {
                let Some(name) = self.prompt("Enter the recipe name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                writeln!(self.output, "Recipe details:")?;
                report::recipe_by_name(&mut self.output, recipes, &name)?;
            }
            MenuChoice::AllIngredients => {
                writeln!(self.output, "All Ingredients:")?;
                report::ingredients(&mut self.output, recipes)?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                self.output.flush()?;
                return Ok(ControlFlow::Break(()));
            }
            MenuChoice::Invalid => writeln!(self.output, "{}", INVALID_INPUT)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Show `message` and read one line, without its terminator; `None` on end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>, RecipeError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;
    use std::io::Cursor;

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::ShowAuthors);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::RecipesByAuthor);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::RecipesByIngredient);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::RecipeByName);
        assert_eq!(MenuChoice::parse("5"), MenuChoice::AllIngredients);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_leading_integer_semantics() {
        assert_eq!(MenuChoice::parse("  3"), MenuChoice::RecipesByIngredient);
        assert_eq!(MenuChoice::parse("2abc"), MenuChoice::RecipesByAuthor);
        assert_eq!(MenuChoice::parse("4.9"), MenuChoice::RecipeByName);
        assert_eq!(MenuChoice::parse("+1"), MenuChoice::ShowAuthors);
        assert_eq!(MenuChoice::parse("-0"), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(MenuChoice::parse("0x2"), MenuChoice::RecipesByAuthor);
        assert_eq!(MenuChoice::parse("0X5"), MenuChoice::AllIngredients);
        assert_eq!(MenuChoice::parse(" 0x1z"), MenuChoice::ShowAuthors);
        assert_eq!(MenuChoice::parse("0x0"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("0x"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("0xg"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("0xA"), MenuChoice::Invalid);
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "abc", "6", "-1", "99", "one", "-", "9999999999999999999999"] {
            assert_eq!(MenuChoice::parse(input), MenuChoice::Invalid, "input: {:?}", input);
        }
    }

    #[test]
    fn test_dispatch_invalid_continues() {
        let store = RecipeStore::new(vec![Recipe::new("Sponge", "Ana", ["flour"])]);
        let mut output = Vec::new();
        let mut session = Session::new(&store, Cursor::new(""), &mut output);

        let flow = session.dispatch(MenuChoice::Invalid).unwrap();
        assert!(flow.is_continue());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Invalid input. Please enter a number between 0 and 5.\n"
        );
    }

    #[test]
    fn test_prompt_strips_only_line_terminator() {
        let store = RecipeStore::default();
        let mut session = Session::new(&store, Cursor::new("  Ana \r\nnext\n"), Vec::new());

        assert_eq!(session.prompt("> ").unwrap(), Some("  Ana ".to_string()));
        assert_eq!(session.prompt("> ").unwrap(), Some("next".to_string()));
        assert_eq!(session.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_run_ends_on_closed_input() {
        let store = RecipeStore::default();
        let mut output = Vec::new();
        Session::new(&store, Cursor::new("7\n"), &mut output)
            .run()
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(INVALID_INPUT));
        assert!(!text.contains("Exiting..."));
    }
}
