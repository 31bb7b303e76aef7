//! Single-word jumble solver: dictionary words that are an exact rearrangement of the input.
//!
//! Generating every permutation of the jumble stops being practical around a dozen letters
//! (12! is already ~479 million). Walking the dictionary trie instead, and never going
//! deeper than the jumble's length, keeps the cost bounded by the part of the trie at
//! or above that depth.
//!
//! ```
//! use anagrammer::jumble;
//! use anagrammer::trie::Trie;
//!
//! let trie = Trie::from_words(["silent", "listen", "tinsel", "lint"])?;
//! let result = jumble::jumble_matches(&trie, "nelsit")?;
//! assert_eq!(result.matches, vec!["listen", "silent", "tinsel"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::letter_bag::is_equal_multiset;
use crate::letters::normalize;
use crate::solver::SolverError;
use crate::trie::{Trie, TrieNode};

/// What a streamed jumble query leaves behind.
#[derive(Debug, Clone)]
pub struct JumbleReport {
    /// The normalized jumble
    pub query: String,
    pub match_count: usize,
    pub elapsed: Duration,
}

/// Collected jumble query.
#[derive(Debug, Clone)]
pub struct JumbleResult {
    pub query: String,
    /// Matching words in alphabetical order
    pub matches: Vec<String>,
    pub elapsed: Duration,
}

/// Call `emit` with every dictionary word of `jumbled.len()` letters that uses exactly
/// the letters of `jumbled`. Returns how many were emitted.
///
/// The jumble itself is reported too when it is a dictionary word.
pub fn find_jumble_matches<F>(trie: &Trie, jumbled: &str, mut emit: F) -> usize
where
    F: FnMut(&str),
{
    let target_len = jumbled.len();
    if target_len == 0 {
        return 0;
    }

    let mut spelled = String::with_capacity(target_len);
    let mut found = 0;
    for (letter, child) in trie.root().children() {
        walk(child, letter, &mut spelled, jumbled, &mut |word: &str| {
            found += 1;
            emit(word);
        });
    }
    found
}

/// Spell one more letter; at the jumble's length compare and stop descending.
fn walk(node: &TrieNode, letter: char, spelled: &mut String, jumbled: &str, emit: &mut dyn FnMut(&str)) {
    spelled.push(letter);

    if spelled.len() == jumbled.len() {
        if node.is_word_end() && is_equal_multiset(spelled, jumbled) {
            emit(spelled.as_str());
        }
    } else {
        for (next, child) in node.children() {
            walk(child, next, spelled, jumbled, emit);
        }
    }

    spelled.pop();
}

/// Solve one jumble query, streaming each match to `emit` as it is found.
///
/// # Errors
///
/// - `SolverError::ParseFailure` if `query` is empty or not purely alphabetic
/// - `SolverError::EmptyDictionary` if `trie` has no words
pub fn solve_jumble<F>(trie: &Trie, query: &str, emit: F) -> Result<JumbleReport, SolverError>
where
    F: FnMut(&str),
{
    let jumbled = normalize(query)?;
    if trie.is_empty() {
        return Err(SolverError::EmptyDictionary);
    }

    let t_solve = Instant::now();
    let match_count = find_jumble_matches(trie, &jumbled, emit);
    let elapsed = t_solve.elapsed();

    debug!("\"{jumbled}\": {match_count} match(es)");

    Ok(JumbleReport { query: jumbled, match_count, elapsed })
}

/// Like [`solve_jumble`], but collects the matches.
///
/// # Errors
///
/// Same as [`solve_jumble`].
pub fn jumble_matches(trie: &Trie, query: &str) -> Result<JumbleResult, SolverError> {
    let mut matches = Vec::new();
    let report = solve_jumble(trie, query, |word| matches.push(word.to_string()))?;
    Ok(JumbleResult { query: report.query, matches, elapsed: report.elapsed })
}
