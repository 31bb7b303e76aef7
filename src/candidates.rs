//! Candidate extraction: every dictionary word that can be spelled from a letter bag.
//!
//! The walk visits the whole trie depth-first, spelling the current path into a shared
//! buffer. It cannot prune on length the way the jumble walk does, because a candidate
//! only has to be a subset of the bag, not a rearrangement of all of it.

use std::collections::HashSet;

use log::debug;

use crate::letter_bag::LetterBag;
use crate::trie::{Trie, TrieNode};

/// Distinct words in first-seen order, sorted before the combination search.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateList {
    #[must_use]
    pub fn new() -> Self {
        CandidateList::default()
    }

    /// Append `word` unless an identical string is already present.
    /// Returns whether it was added.
    pub fn push(&mut self, word: &str) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.words.push(word.to_string());
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// The words sorted ascending (byte order, which is alphabetical for a-z),
    /// ready for the combination search.
    #[must_use]
    pub fn into_sorted(mut self) -> Vec<String> {
        self.words.sort();
        self.words
    }
}

/// Collect every dictionary word whose letters are a sub-multiset of `bag`.
///
/// The list comes back in trie (alphabetical) order; callers that depend on the
/// order still sort it explicitly.
#[must_use]
pub fn extract_candidates(trie: &Trie, bag: &str) -> CandidateList {
    let target = LetterBag::new(bag);
    let mut candidates = CandidateList::new();
    let mut spelled = String::new();
    for (letter, child) in trie.root().children() {
        collect_candidates(child, letter, &mut spelled, &target, &mut candidates);
    }
    debug!("{} candidate(s) for \"{bag}\"", candidates.len());
    candidates
}

fn collect_candidates(
    node: &TrieNode,
    letter: char,
    spelled: &mut String,
    target: &LetterBag,
    candidates: &mut CandidateList,
) {
    spelled.push(letter);

    if node.is_word_end() && target.fits(spelled) {
        candidates.push(spelled);
    }
    for (next, child) in node.children() {
        collect_candidates(child, next, spelled, target, candidates);
    }

    spelled.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dedups_exact_strings() {
        let mut list = CandidateList::new();
        assert!(list.push("dog"));
        assert!(list.push("god"));
        assert!(!list.push("dog"));
        assert_eq!(list.as_slice(), ["dog", "god"]);
    }

    #[test]
    fn test_into_sorted() {
        let mut list = CandidateList::new();
        for w in ["go", "dog", "g", "do"] {
            list.push(w);
        }
        assert_eq!(list.into_sorted(), vec!["do", "dog", "g", "go"]);
    }

    #[test]
    fn test_extract_subset_words_only() {
        let trie = Trie::from_words(["do", "g", "dog", "god", "go", "good", "dot", "cat"]).unwrap();
        let candidates = extract_candidates(&trie, "dog");
        assert_eq!(candidates.as_slice(), ["do", "dog", "g", "go", "god"]);
    }

    #[test]
    fn test_extract_includes_shorter_words_and_respects_counts() {
        let trie = Trie::from_words(["a", "aa", "aaa", "ab", "ba", "b"]).unwrap();
        let candidates = extract_candidates(&trie, "aab");
        assert_eq!(candidates.as_slice(), ["a", "aa", "ab", "b", "ba"]);
    }

    #[test]
    fn test_extract_idempotent_insertion_gives_no_duplicates() {
        let trie = Trie::from_words(["tac", "cat", "cat", "act", "tac"]).unwrap();
        let candidates = extract_candidates(&trie, "tacos");
        assert_eq!(candidates.as_slice(), ["act", "cat", "tac"]);
    }

    #[test]
    fn test_extract_no_match() {
        let trie = Trie::from_words(["xyz", "quiz"]).unwrap();
        assert!(extract_candidates(&trie, "dog").is_empty());
        assert!(extract_candidates(&Trie::new(), "dog").is_empty());
    }
}
