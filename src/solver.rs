//! Multi-word anagram solver: splits a letter bag into dictionary words that use every
//! letter exactly once.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `ParseFailure` (Query was rejected (wraps [`ParseError`]))
//! - S002: `EmptyDictionary` (The trie holds no words)
//!
//! Finding nothing is not an error: the result simply has no solutions.
//!
//! # Examples
//!
//! ```
//! use anagrammer::solver;
//! use anagrammer::trie::Trie;
//!
//! let trie = Trie::from_words(["do", "g", "dog", "god", "go"])?;
//! let result = solver::anagram_solutions(&trie, "dog")?;
//!
//! let lines: Vec<String> = result.solutions.iter().map(|s| solver::solution_to_string(s)).collect();
//! assert_eq!(lines, vec!["do g", "dog", "god"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Solutions can also be streamed as they are found:
//!
//! ```
//! use anagrammer::solver;
//! use anagrammer::trie::Trie;
//!
//! let trie = Trie::from_words(["a", "b", "ab"])?;
//! let report = solver::solve_anagram(&trie, "ab", |words| println!("{}", words.join(" ")))?;
//! assert_eq!(report.solution_count, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Search order and duplicates
//!
//! Candidates are sorted and the search only moves forward through the list, one
//! position past the word just placed. Each decomposition is therefore emitted once,
//! with its words in ascending order, and no candidate appears twice within one
//! decomposition.

use std::time::{Duration, Instant};

use log::debug;

use crate::candidates::extract_candidates;
use crate::errors::ParseError;
use crate::letter_bag::LetterBag;
use crate::letters::normalize;
use crate::trie::Trie;

/// Unified error type for both solvers.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The query could not be normalized into a-z letters.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    /// There is nothing to search: the dictionary produced an empty trie.
    #[error("the dictionary holds no words")]
    EmptyDictionary,
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "S001",
            SolverError::EmptyDictionary => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "Query was rejected",
            SolverError::EmptyDictionary => "The trie holds no words",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "The query could not be normalized. This wraps an underlying ParseError (see Parse Errors section for specific error codes). Only this query is rejected.",
            SolverError::EmptyDictionary => "The solver was handed a trie with no words in it, so every query would trivially have no results.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::EmptyDictionary => Some("Load a dictionary with at least one purely alphabetic word"),
            SolverError::ParseFailure(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            SolverError::EmptyDictionary => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Wall-clock time spent in each phase of one anagram query.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnagramTimings {
    pub extract: Duration,
    pub sort: Duration,
    pub search: Duration,
}

/// What a streamed anagram query leaves behind once every solution has been emitted.
#[derive(Debug, Clone)]
pub struct AnagramReport {
    /// The normalized letter bag
    pub query: String,
    /// Sorted, deduplicated candidate words the search ran over
    pub candidates: Vec<String>,
    pub solution_count: usize,
    pub timings: AnagramTimings,
}

/// Collected anagram query.
#[derive(Debug, Clone)]
pub struct AnagramResult {
    pub query: String,
    pub candidates: Vec<String>,
    /// Every decomposition, in the order found
    pub solutions: Vec<Vec<String>>,
    pub timings: AnagramTimings,
}

/// Join a decomposition's words with single spaces.
pub fn solution_to_string<S: AsRef<str>>(solution: &[S]) -> String {
    solution.iter().map(|w| w.as_ref()).collect::<Vec<&str>>().join(" ")
}

/// Per-query search state: the live bag and the words placed so far.
///
/// Built fresh for every query so no consumed marks carry over.
struct Search<'a, F> {
    candidates: &'a [String],
    bag: LetterBag,
    stack: Vec<&'a str>,
    emit: F,
    found: usize,
}

impl<'a, F: FnMut(&[&str])> Search<'a, F> {
    /// Try each candidate from `start` on that still fits in what is left of the bag.
    fn descend(&mut self, start: usize, remaining: usize) {
        debug_assert_eq!(self.bag.remaining(), remaining, "bag and remaining length disagree");
        let candidates = self.candidates;
        for (i, word) in candidates.iter().enumerate().skip(start) {
            if word.len() > remaining || !self.bag.consume(word) {
                continue;
            }
            self.stack.push(word);

            let left = remaining - word.len();
            if left == 0 {
                self.found += 1;
                (self.emit)(self.stack.as_slice());
            } else {
                self.descend(i + 1, left);
            }

            self.stack.pop();
            self.bag.restore(word);
        }
    }
}

/// Backtrack over sorted `candidates`, calling `emit` with every sequence of words whose
/// letters together are exactly `target`. Returns how many were emitted.
///
/// Feasibility is checked against the letters still unused on the current branch, never
/// against the original bag, so no letter is spent twice.
pub fn find_decompositions<F>(candidates: &[String], target: &str, emit: F) -> usize
where
    F: FnMut(&[&str]),
{
    if target.is_empty() {
        return 0;
    }
    let mut search = Search {
        candidates,
        bag: LetterBag::new(target),
        stack: Vec::new(),
        emit,
        found: 0,
    };
    search.descend(0, target.len());

    debug_assert!(search.stack.is_empty(), "solution stack not unwound");
    debug_assert_eq!(search.bag, LetterBag::new(target), "letter bag not restored");
    search.found
}

/// Receives the output of one anagram query while it is being solved.
pub trait AnagramSink {
    /// Called once with the sorted candidates, before the search starts.
    fn candidates(&mut self, _candidates: &[String]) {}

    /// Called with each decomposition the moment it is found.
    fn solution(&mut self, words: &[&str]);
}

/// Adapts a plain solution callback.
struct EmitOnly<F>(F);

impl<F: FnMut(&[&str])> AnagramSink for EmitOnly<F> {
    fn solution(&mut self, words: &[&str]) {
        (self.0)(words);
    }
}

/// Solve one anagram query against `trie`, streaming each decomposition to `emit`
/// the moment it is found.
///
/// # Errors
///
/// - `SolverError::ParseFailure` if `query` is empty or not purely alphabetic
/// - `SolverError::EmptyDictionary` if `trie` has no words
pub fn solve_anagram<F>(trie: &Trie, query: &str, emit: F) -> Result<AnagramReport, SolverError>
where
    F: FnMut(&[&str]),
{
    solve_anagram_into(trie, query, &mut EmitOnly(emit))
}

/// Like [`solve_anagram`], but also hands the sorted candidate list to `sink`
/// before the first decomposition is searched for.
///
/// # Errors
///
/// Same as [`solve_anagram`].
pub fn solve_anagram_into<S>(trie: &Trie, query: &str, sink: &mut S) -> Result<AnagramReport, SolverError>
where
    S: AnagramSink + ?Sized,
{
    let bag = normalize(query)?;
    if trie.is_empty() {
        return Err(SolverError::EmptyDictionary);
    }

    let t_extract = Instant::now();
    let candidates = extract_candidates(trie, &bag);
    let extract = t_extract.elapsed();

    let t_sort = Instant::now();
    let candidates = candidates.into_sorted();
    let sort = t_sort.elapsed();

    sink.candidates(&candidates);

    let t_search = Instant::now();
    let solution_count = find_decompositions(&candidates, &bag, |words| sink.solution(words));
    let search = t_search.elapsed();

    debug!("\"{bag}\": {} candidate(s), {solution_count} solution(s)", candidates.len());

    Ok(AnagramReport {
        query: bag,
        candidates,
        solution_count,
        timings: AnagramTimings { extract, sort, search },
    })
}

/// Like [`solve_anagram`], but collects the decompositions.
///
/// # Errors
///
/// Same as [`solve_anagram`].
pub fn anagram_solutions(trie: &Trie, query: &str) -> Result<AnagramResult, SolverError> {
    let mut solutions: Vec<Vec<String>> = Vec::new();
    let report = solve_anagram(trie, query, |words| {
        solutions.push(words.iter().map(|w| (*w).to_string()).collect());
    })?;

    Ok(AnagramResult {
        query: report.query,
        candidates: report.candidates,
        solutions,
        timings: report.timings,
    })
}
