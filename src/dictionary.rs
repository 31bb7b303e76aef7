//! `dictionary` — load a word list and build the trie both solvers search.
//!
//! The input is free-form text: every whitespace-separated token is a candidate word,
//! so both one-word-per-line files like `/usr/share/dict/words` and space-separated
//! lists work. Each token is run through [`normalize`]; tokens it rejects (possessives
//! like "dog's", accented words like "cliché", numbers) are skipped silently and only
//! counted.
//!
//! A dictionary that cannot be read, or that yields no usable word at all, is fatal to
//! the caller: there is no degraded mode without one.
//!
//! The public API provides:
//! - `parse_from_str(...)` — build from in-memory text.
//! - `load_from_path(...)` — read a file and build from its contents.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::letters::normalize;
use crate::trie::Trie;

/// Word list the CLI uses unless told otherwise.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Errors that prevent a dictionary from being built.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no usable words in dictionary ({skipped} token(s) rejected)")]
    NoWords { skipped: usize },
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "D001",
            DictionaryError::NoWords { .. } => "D002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "Dictionary file could not be read",
            DictionaryError::NoWords { .. } => "Dictionary contains no usable word",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "The word list could not be opened or read. Without a dictionary neither solver can run, so the session ends.",
            DictionaryError::NoWords { .. } => "Every token in the word list was rejected (empty file, or only words with digits, punctuation or accents). Without a dictionary neither solver can run, so the session ends.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::Io { .. } => Some("Check the path, or pass another word list with --dictionary <PATH>"),
            DictionaryError::NoWords { .. } => Some("Use a word list with one plain a-z word per line"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A built dictionary and the bookkeeping from building it.
#[derive(Debug, Default)]
pub struct Dictionary {
    pub trie: Trie,
    /// Tokens that normalized cleanly (duplicates included)
    pub accepted: usize,
    /// Tokens rejected by normalization
    pub skipped: usize,
}

impl Dictionary {
    /// Build a dictionary from in-memory text.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NoWords` if no token survives normalization.
    pub fn parse_from_str(contents: &str) -> Result<Dictionary, DictionaryError> {
        let mut dictionary = Dictionary::default();

        for token in contents.split_whitespace() {
            let word = match normalize(token) {
                Ok(word) => word,
                Err(e) => {
                    debug!("skipping \"{token}\": {e}");
                    dictionary.skipped += 1;
                    continue;
                }
            };
            match dictionary.trie.insert(&word) {
                Ok(()) => dictionary.accepted += 1,
                Err(e) => {
                    debug!("skipping \"{token}\": {e}");
                    dictionary.skipped += 1;
                }
            }
        }

        if dictionary.trie.is_empty() {
            return Err(DictionaryError::NoWords { skipped: dictionary.skipped });
        }

        info!(
            "Dictionary built: {} distinct words, {} trie nodes, {} token(s) skipped",
            dictionary.trie.len(),
            dictionary.trie.node_count(),
            dictionary.skipped
        );
        Ok(dictionary)
    }

    /// Read `path` and build a dictionary from its contents.
    ///
    /// Bytes that are not valid UTF-8 are replaced, which makes the affected
    /// words fail normalization rather than failing the whole load.
    ///
    /// # Errors
    ///
    /// - `DictionaryError::Io` if the file cannot be read
    /// - `DictionaryError::NoWords` if it holds no usable word
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path_ref = path.as_ref();

        let bytes = std::fs::read(path_ref).map_err(|source| DictionaryError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;

        Self::parse_from_str(&String::from_utf8_lossy(&bytes))
    }
}
