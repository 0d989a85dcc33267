//! Text input parsing
//!
//! Everything typed by a user is turned into [`Key`]s here, so malformed
//! numbers never reach the tree or the step generators.

use thiserror::Error;

use crate::tree::Key;

/// Errors raised while parsing user input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse
    #[error("empty input")]
    Empty,

    /// Token is not an integer key
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Verb does not name an operation
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// Operation needs a value but none was given
    #[error("operation '{0}' needs a value")]
    MissingArgument(String),

    /// Operation takes no value but got one
    #[error("operation '{op}' takes no value, got '{extra}'")]
    UnexpectedArgument {
        /// Operation verb
        op: String,
        /// First surplus token
        extra: String,
    },

    /// Palette name not recognized
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),
}

/// Parse a single key, surrounding whitespace ignored
pub fn parse_key(token: &str) -> Result<Key, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::Empty);
    }
    token
        .parse::<Key>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

/// Parse a list of keys separated by commas and/or whitespace
///
/// `"50, 25 75"` → `[50, 25, 75]`. Empty input yields an empty list.
pub fn parse_values(input: &str) -> Result<Vec<Key>, ParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_key)
        .collect()
}
