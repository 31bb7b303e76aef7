//! Alphabet constants and normalization of raw words into the 26-letter alphabet.

use std::ops::RangeInclusive;

use crate::errors::ParseError;

// Character-set constants
pub const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Map a lowercase letter to its rank: 'a' -> 0, 'b' -> 1, ..., 'z' -> 25.
///
/// # Errors
///
/// Returns `ParseError::InvalidLowercaseChar` for anything outside `a..=z`.
pub fn letter_rank(c: char) -> Result<usize, Box<ParseError>> {
    if LOWERCASE_ALPHABET.contains(&c) {
        Ok(c as usize - 'a' as usize)
    } else {
        Err(Box::new(ParseError::InvalidLowercaseChar { invalid_char: c }))
    }
}

/// Normalize a raw word or query into lowercase a-z.
///
/// Surrounding whitespace is trimmed; anything left that is not an ASCII letter
/// rejects the whole word (e.g. "cliché", "don't", "x1").
///
/// # Errors
///
/// - `ParseError::EmptyInput` if nothing remains after trimming
/// - `ParseError::InvalidChar` for the first non-alphabetic character
pub fn normalize(raw: &str) -> Result<String, Box<ParseError>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Box::new(ParseError::EmptyInput));
    }

    if let Some(invalid_char) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(Box::new(ParseError::InvalidChar {
            input: trimmed.to_string(),
            invalid_char,
        }));
    }

    Ok(trimmed.to_ascii_lowercase())
}
