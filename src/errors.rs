//! Error types for query and word validation, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E003) for documentation lookup:
//!
//! - E001: `EmptyInput` (Nothing left after trimming)
//! - E002: `InvalidChar` (Non-alphabetic character in a query or word)
//! - E003: `InvalidLowercaseChar` (Character outside a-z reached the trie)
//!
//! None of these are fatal: a rejected query leaves the dictionary untouched and the
//! session moves on to the next one.
//!
//! # Examples
//!
//! ```
//! use anagrammer::errors::ParseError;
//! use anagrammer::letters::normalize;
//!
//! match normalize("don't") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E002");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

/// Errors raised while validating a query or a dictionary word
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Empty input")]
    EmptyInput,

    #[error("\"{input}\" contains non-alphabetic character '{invalid_char}'")]
    InvalidChar { input: String, invalid_char: char },

    #[error("Invalid character '{invalid_char}' (only lowercase a-z allowed)")]
    InvalidLowercaseChar { invalid_char: char },
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "E001",
            ParseError::InvalidChar { .. } => "E002",
            ParseError::InvalidLowercaseChar { .. } => "E003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "Nothing left after trimming",
            ParseError::InvalidChar { .. } => "Non-alphabetic character in a query or word",
            ParseError::InvalidLowercaseChar { .. } => "Character outside a-z reached the trie",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "The query was empty or contained only whitespace. An empty letter bag has no decompositions, so the query is rejected instead.",
            ParseError::InvalidChar { .. } => "Queries and dictionary words are restricted to the 26 letters of the Latin alphabet. Digits, punctuation, spaces inside the word and accented letters are rejected.",
            ParseError::InvalidLowercaseChar { .. } => "The trie only stores lowercase a-z. Words must go through `normalize` before insertion; seeing this error means a caller skipped that step.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyInput => Some("Enter at least one letter, e.g. 'listen'"),
            ParseError::InvalidChar { .. } => Some("Only letters a-z are allowed (case is ignored)"),
            ParseError::InvalidLowercaseChar { .. } => Some("Normalize words to lowercase a-z before inserting them"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
