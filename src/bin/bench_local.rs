//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of anagram and jumble queries on *your* machine.
//! - Builds the dictionary trie once, then runs each query several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few solutions:          `cargo run --bin bench_local --release -- -p 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Queries live in `get_cases()` below.
//! - Solutions are collected inside the timed section but printed outside it.
//! - One warm-up run per query is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use anagrammer::dictionary::{Dictionary, DEFAULT_DICTIONARY_PATH};
use anagrammer::jumble;
use anagrammer::solver;
use anagrammer::trie::Trie;

/// Simple local benchmark runner: build the dictionary once, time several queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list (whitespace-separated words)
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Number of repeats per query (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many solutions per query (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

#[derive(Clone, Copy, Debug)]
enum Kind {
    Anagram,
    Jumble,
}

impl Kind {
    /// "solution(s)" for anagrams, "match(es)" for jumbles.
    fn result_noun(self, count: usize) -> String {
        match self {
            Kind::Anagram => pluralizer(count, "solution".into(), None),
            Kind::Jumble => pluralizer(count, "match".into(), Some("matches".into())),
        }
    }
}

/// A benchmark case: which solver, and the letters to feed it.
#[derive(Clone)]
struct Case {
    kind: Kind,
    query: &'static str,
}

/// Edit/add new queries here. Longer anagram bags grow the search quickly.
fn get_cases() -> Vec<Case> {
    vec![
        Case { kind: Kind::Anagram, query: "dog" },
        Case { kind: Kind::Anagram, query: "listen" },
        Case { kind: Kind::Anagram, query: "tacos" },
        Case { kind: Kind::Anagram, query: "astronomer" },
        Case { kind: Kind::Anagram, query: "dormitorys" },
        Case { kind: Kind::Jumble, query: "nelsit" },
        Case { kind: Kind::Jumble, query: "rateocsnm" },
        Case { kind: Kind::Jumble, query: "nolcetrecisitiy" },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Run one case to completion, returning every solution as display text.
fn run_case(trie: &Trie, case: &Case) -> Result<Vec<String>, solver::SolverError> {
    match case.kind {
        Kind::Anagram => {
            let mut lines = Vec::new();
            solver::solve_anagram(trie, black_box(case.query), |words| {
                lines.push(solver::solution_to_string(words));
            })?;
            Ok(lines)
        }
        Kind::Jumble => Ok(jumble::jumble_matches(trie, black_box(case.query))?.matches),
    }
}

const MAX_QUERY_LEN: usize = 24;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// One row in the benchmark summary: (kind, query, median seconds, number of results).
    type SummaryRow = (Kind, String, f64, usize);

    let cli = Cli::parse();

    // Build the dictionary once. This I/O is *not* included in per-query timing.
    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!(
        "Loaded {} words ({} trie nodes) in {:.3}s",
        dictionary.trie.len(),
        dictionary.trie.node_count(),
        load_secs
    );

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {:?} {}", idx + 1, case.kind, case.query);

        if let Err(e) = run_case(&dictionary.trie, case) {
            eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_solutions: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let solutions = match run_case(&dictionary.trie, case) {
                Ok(solutions) => solutions,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {}", rep + 1, cli.num_repeats, e);
                    continue;
                }
            };
            let solve_secs = t_solve.elapsed().as_secs_f64();

            let _keep = black_box(solutions.len());

            times.push(solve_secs);
            last_solutions = solutions;

            eprintln!(
                "  run {:>2}/{:>2}: {:.6}s ({} {})",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_solutions.len(),
                case.kind.result_noun(last_solutions.len())
            );
        }

        let med = median(times);

        for sol in last_solutions.iter().take(cli.print_limit) {
            println!("{sol}");
        }

        eprintln!(
            "  → median {:.6}s over {} run(s); last run produced {} {}.",
            med,
            cli.num_repeats,
            last_solutions.len(),
            case.kind.result_noun(last_solutions.len())
        );

        summary.push((case.kind, case.query.to_string(), med, last_solutions.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<8} | {:<MAX_QUERY_LEN$} | {:>12} | {:>11}",
        "kind", "query", "median (s)", "# solutions"
    );
    eprintln!("{:-<8}-+-{:-<MAX_QUERY_LEN$}-+-{:-<12}-+-{:-<11}", "", "", "", "");
    for (kind, query, med, num_solutions) in &summary {
        let display = if query.len() > MAX_QUERY_LEN {
            format!("{}…", query.chars().take(MAX_QUERY_LEN - 1).collect::<String>())
        } else {
            query.clone()
        };
        let kind = format!("{kind:?}");
        eprintln!("{kind:<8} | {display:<MAX_QUERY_LEN$} | {med:>12.6} | {num_solutions:>11}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "solution".into(), None), "solutions");
        assert_eq!(pluralizer(1, "solution".into(), None), "solution");
        assert_eq!(pluralizer(2, "solution".into(), None), "solutions");
        assert_eq!(pluralizer(0, "match".into(), Some("matches".into())), "matches");
        assert_eq!(pluralizer(1, "match".into(), Some("matches".into())), "match");
    }

    #[test]
    fn test_result_noun() {
        assert_eq!(Kind::Anagram.result_noun(1), "solution");
        assert_eq!(Kind::Anagram.result_noun(3), "solutions");
        assert_eq!(Kind::Jumble.result_noun(1), "match");
        assert_eq!(Kind::Jumble.result_noun(0), "matches");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_run_case_small_dictionary() {
        let trie = Trie::from_words(["do", "g", "dog", "god", "go"]).unwrap();
        let anagrams = run_case(&trie, &Case { kind: Kind::Anagram, query: "dog" }).unwrap();
        assert_eq!(anagrams, vec!["do g", "dog", "god"]);
        let jumbles = run_case(&trie, &Case { kind: Kind::Jumble, query: "ogd" }).unwrap();
        assert_eq!(jumbles, vec!["dog", "god"]);
    }
}
