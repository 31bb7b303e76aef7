//! Integration tests for the anagram and jumble solvers.
//!
//! These tests run the complete pipeline from loading a word list through solving
//! queries, using a small realistic dictionary with a few malformed entries mixed in.

use anagrammer::dictionary::{Dictionary, DictionaryError};
use anagrammer::errors::ParseError;
use anagrammer::jumble::{jumble_matches, solve_jumble};
use anagrammer::solver::{anagram_solutions, solution_to_string, solve_anagram, SolverError};

const FIXTURE: &str = "tests/fixtures/test_dictionary.txt";

/// Load the test dictionary from fixtures
fn load_test_dictionary() -> Dictionary {
    Dictionary::load_from_path(FIXTURE).expect("Failed to load test dictionary")
}

/// Helper to render every solution as one space-joined line
fn solution_lines(dictionary: &Dictionary, query: &str) -> Vec<String> {
    anagram_solutions(&dictionary.trie, query)
        .unwrap()
        .solutions
        .iter()
        .map(|s| solution_to_string(s))
        .collect()
}

#[cfg(test)]
mod dictionary_loading {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        let dictionary = load_test_dictionary();
        // dog's, x-ray, 1984, cliché
        assert_eq!(dictionary.skipped, 4);
        assert_eq!(dictionary.accepted, 48);
        // "Lot" and "lot" collapse to one word
        assert_eq!(dictionary.trie.len(), 47);
    }

    #[test]
    fn test_words_are_lowercased() {
        let dictionary = load_test_dictionary();
        assert!(dictionary.trie.contains_exact("africa"));
        assert!(dictionary.trie.contains_exact("i"));
        assert!(!dictionary.trie.contains_exact("Africa"));
    }

    #[test]
    fn test_malformed_words_absent() {
        let dictionary = load_test_dictionary();
        assert!(!dictionary.trie.contains_exact("dogs"));
        assert!(!dictionary.trie.contains_exact("xray"));
        assert!(!dictionary.trie.contains_exact("clich"));
        assert!(dictionary.trie.contains_exact("dog"));
    }

    #[test]
    fn test_prefixes_are_not_words() {
        let dictionary = load_test_dictionary();
        assert!(!dictionary.trie.contains_exact("lis"));
        assert!(!dictionary.trie.contains_exact("tac"));
        assert!(dictionary.trie.contains_exact("taco"));
    }

    #[test]
    fn test_words_listed_in_order() {
        let dictionary = load_test_dictionary();
        let words = dictionary.trie.words();
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
        assert_eq!(words.first().map(String::as_str), Some("a"));
        assert_eq!(words.last().map(String::as_str), Some("to"));
    }
}

#[cfg(test)]
mod anagram_solving {
    use super::*;

    #[test]
    fn test_tacos_multi_word() {
        let dictionary = load_test_dictionary();
        assert_eq!(
            solution_lines(&dictionary, "tacos"),
            vec!["a cost", "act so", "cat so", "coast", "coats", "costa", "sac to", "tacos"]
        );
    }

    #[test]
    fn test_tacos_candidates_sorted() {
        let dictionary = load_test_dictionary();
        let result = anagram_solutions(&dictionary.trie, "tacos").unwrap();
        assert_eq!(result.candidates.len(), 21);
        assert_eq!(result.candidates.first().map(String::as_str), Some("a"));
        assert_eq!(result.candidates.last().map(String::as_str), Some("to"));
        let mut sorted = result.candidates.clone();
        sorted.sort();
        assert_eq!(result.candidates, sorted);
    }

    #[test]
    fn test_listen_single_words_only() {
        let dictionary = load_test_dictionary();
        assert_eq!(
            solution_lines(&dictionary, "listen"),
            vec!["enlist", "inlets", "listen", "silent", "tinsel"]
        );
    }

    #[test]
    fn test_dog_and_cat() {
        let dictionary = load_test_dictionary();
        assert_eq!(solution_lines(&dictionary, "dog"), vec!["dog", "god"]);
        assert_eq!(solution_lines(&dictionary, "cat"), vec!["act", "cat"]);
    }

    #[test]
    fn test_every_solution_uses_exact_letters() {
        let dictionary = load_test_dictionary();
        let result = anagram_solutions(&dictionary.trie, "tacos").unwrap();
        let mut expected: Vec<char> = "tacos".chars().collect();
        expected.sort_unstable();
        for solution in &result.solutions {
            let mut letters: Vec<char> = solution.concat().chars().collect();
            letters.sort_unstable();
            assert_eq!(letters, expected, "solution {solution:?}");
            for pair in solution.windows(2) {
                assert!(pair[0] < pair[1], "words out of order in {solution:?}");
            }
        }
    }

    #[test]
    fn test_streamed_count_matches_report() {
        let dictionary = load_test_dictionary();
        let mut streamed = 0;
        let report = solve_anagram(&dictionary.trie, "tacos", |_| streamed += 1).unwrap();
        assert_eq!(report.solution_count, 8);
        assert_eq!(streamed, 8);
        assert_eq!(report.query, "tacos");
    }
}

#[cfg(test)]
mod jumble_solving {
    use super::*;

    #[test]
    fn test_nelsit() {
        let dictionary = load_test_dictionary();
        let result = jumble_matches(&dictionary.trie, "nelsit").unwrap();
        assert_eq!(result.matches, vec!["enlist", "inlets", "listen", "silent", "tinsel"]);
    }

    #[test]
    fn test_tacos_rearrangements() {
        let dictionary = load_test_dictionary();
        let result = jumble_matches(&dictionary.trie, "cotas").unwrap();
        assert_eq!(result.matches, vec!["coast", "coats", "costa", "tacos"]);
    }

    #[test]
    fn test_longer_and_shorter_words_excluded() {
        let dictionary = load_test_dictionary();
        // "listen", "lint" and "it" share letters but not the length
        let result = jumble_matches(&dictionary.trie, "tisl").unwrap();
        assert_eq!(result.matches, vec!["list", "slit"]);
    }

    #[test]
    fn test_jumble_is_subset_of_anagram_solutions() {
        let dictionary = load_test_dictionary();
        let jumbles = jumble_matches(&dictionary.trie, "tacos").unwrap().matches;
        let anagrams = solution_lines(&dictionary, "tacos");
        for word in &jumbles {
            assert!(anagrams.contains(word), "{word} missing from anagram solutions");
        }
    }

    #[test]
    fn test_streamed_count_matches_report() {
        let dictionary = load_test_dictionary();
        let mut seen = Vec::new();
        let report = solve_jumble(&dictionary.trie, "NELSIT", |w| seen.push(w.to_string())).unwrap();
        assert_eq!(report.query, "nelsit");
        assert_eq!(report.match_count, 5);
        assert_eq!(seen.len(), 5);
    }
}

#[cfg(test)]
mod error_cases {
    use super::*;

    #[test]
    fn test_non_alphabetic_query() {
        let dictionary = load_test_dictionary();
        let err = anagram_solutions(&dictionary.trie, "c4t").unwrap_err();
        assert_eq!(err.code(), "S001");
        match err {
            SolverError::ParseFailure(pe) => {
                assert!(matches!(*pe, ParseError::InvalidChar { invalid_char: '4', .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_query() {
        let dictionary = load_test_dictionary();
        for query in ["", "   ", "\n"] {
            let err = jumble_matches(&dictionary.trie, query).unwrap_err();
            assert!(matches!(err, SolverError::ParseFailure(ref pe) if matches!(**pe, ParseError::EmptyInput)));
        }
    }

    #[test]
    fn test_bad_query_does_not_poison_session() {
        let dictionary = load_test_dictionary();
        assert!(anagram_solutions(&dictionary.trie, "do g").is_err());
        assert_eq!(solution_lines(&dictionary, "dog"), vec!["dog", "god"]);
    }

    #[test]
    fn test_missing_dictionary() {
        let err = Dictionary::load_from_path("tests/fixtures/no_such_dictionary.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert_eq!(err.code(), "D001");
        assert!(err.to_string().contains("no_such_dictionary.txt"));
    }

    #[test]
    fn test_dictionary_without_words() {
        let err = Dictionary::parse_from_str("1984\nx-ray\n").unwrap_err();
        assert!(matches!(err, DictionaryError::NoWords { skipped: 2 }));
        assert!(err.display_detailed().contains("D002"));
    }
}

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn test_no_results() {
        let dictionary = load_test_dictionary();
        let result = anagram_solutions(&dictionary.trie, "zzz").unwrap();
        assert!(result.candidates.is_empty());
        assert!(result.solutions.is_empty());
        assert!(jumble_matches(&dictionary.trie, "zzz").unwrap().matches.is_empty());
    }

    #[test]
    fn test_single_letter() {
        let dictionary = load_test_dictionary();
        assert_eq!(solution_lines(&dictionary, "A"), vec!["a"]);
        assert_eq!(jumble_matches(&dictionary.trie, "i").unwrap().matches, vec!["i"]);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let dictionary = load_test_dictionary();
        assert_eq!(solution_lines(&dictionary, "  TaCoS\r\n"), solution_lines(&dictionary, "tacos"));
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let dictionary = load_test_dictionary();
        let first = solution_lines(&dictionary, "tacos");
        for _ in 0..3 {
            assert_eq!(solution_lines(&dictionary, "listen").len(), 5);
            assert_eq!(solution_lines(&dictionary, "tacos"), first);
        }
    }

    #[test]
    fn test_letters_not_reused_across_words() {
        let dictionary = load_test_dictionary();
        // "so" and "to" both fit, but there is only one 'o'
        let lines = solution_lines(&dictionary, "sto");
        assert_eq!(lines, vec!["sot"]);
    }
}
