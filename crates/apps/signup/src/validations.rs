//! Text predicates used by the signup field rules.

use std::sync::OnceLock;

use regex::Regex;

fn pattern(cell: &'static OnceLock<Option<Regex>>, source: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(source) {
        Ok(regex) => Some(regex),
        Err(err) => {
            leptos::logging::warn!("signup pattern `{source}` rejected: {err}");
            None
        }
    })
    .as_ref()
}

fn check(matches: bool, message: &str) -> Result<(), String> {
    if matches {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Accepts values whose first character is an uppercase letter.
pub fn starts_with_capital(value: &str, message: &str) -> Result<(), String> {
    static CAPITAL: OnceLock<Option<Regex>> = OnceLock::new();
    let matches = pattern(&CAPITAL, r"^\p{Lu}").is_some_and(|regex| regex.is_match(value));
    check(matches, message)
}

/// Accepts non-empty values made only of letters, apostrophes, hyphens and whitespace.
pub fn contains_characters(value: &str, message: &str) -> Result<(), String> {
    static NAME_CHARACTERS: OnceLock<Option<Regex>> = OnceLock::new();
    let matches =
        pattern(&NAME_CHARACTERS, r"^[\p{L}'\-\s]+$").is_some_and(|regex| regex.is_match(value));
    check(matches, message)
}
