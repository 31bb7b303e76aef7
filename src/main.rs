use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use anagrammer::dictionary::{Dictionary, DictionaryError, DEFAULT_DICTIONARY_PATH};
use anagrammer::jumble;
use anagrammer::solver::{self, AnagramSink, SolverError};
use anagrammer::trie::Trie;

/// Which puzzle to solve for each query
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Split the letters into one or more words that use every letter exactly once
    Anagram,
    /// Find single words that rearrange all of the letters
    Jumble,
}

impl Mode {
    fn prompt(self) -> &'static str {
        match self {
            Mode::Anagram => "Enter anagram: ",
            Mode::Jumble => "Enter jumbled word: ",
        }
    }
}

/// Multi-word anagram and word-jumble solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Letters to solve; omit to be prompted for queries until end of input
    queries: Vec<String>,

    /// Path to the word list (whitespace-separated words)
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Puzzle type
    #[arg(short, long, value_enum, default_value_t = Mode::Anagram)]
    mode: Mode,

    /// Print the sorted candidate words before the anagrams (anagram mode only)
    #[arg(short = 'c', long)]
    show_candidates: bool,

    /// Enable debug logging (same as setting ANAGRAMMER_DEBUG)
    #[arg(long)]
    debug: bool,
}

/// Entry point of the anagrammer CLI.
///
/// Delegates to [`try_main`], printing any fatal error with its code before
/// exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("ANAGRAMMER_DEBUG").is_ok();
    anagrammer::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        if let Some(dict_err) = e.downcast_ref::<DictionaryError>() {
            eprintln!("Error: {}", dict_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// 1. Build the dictionary trie once (fatal on failure).
/// 2. Solve each query given on the command line, or prompt for queries until EOF.
///
/// A rejected query is reported and skipped; it never ends the session.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    eprintln!(
        "Loaded {} words from {} in {:.3}s",
        dictionary.trie.len(),
        cli.dictionary,
        t_load.elapsed().as_secs_f64()
    );

    if !cli.queries.is_empty() {
        for query in &cli.queries {
            run_query(&dictionary.trie, cli, query);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("{}", cli.mode.prompt());
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        run_query(&dictionary.trie, cli, &line);
    }
    Ok(())
}

/// Solve one query and print the results; a rejected query is reported on stderr.
fn run_query(trie: &Trie, cli: &Cli, query: &str) {
    let mut out = io::stdout().lock();
    let outcome = match cli.mode {
        Mode::Anagram => run_anagram(&mut out, trie, query, cli.show_candidates),
        Mode::Jumble => run_jumble(&mut out, trie, query),
    };
    match outcome {
        Ok(()) => {}
        Err(QueryError::Solver(e)) => eprintln!("Error: {}", e.display_detailed()),
        Err(QueryError::Output(e)) => eprintln!("Error: failed to write results: {e}"),
    }
}

/// Why a single query produced no (complete) output.
#[derive(Debug)]
enum QueryError {
    Solver(SolverError),
    Output(io::Error),
}

impl From<SolverError> for QueryError {
    fn from(e: SolverError) -> Self {
        QueryError::Solver(e)
    }
}

impl From<io::Error> for QueryError {
    fn from(e: io::Error) -> Self {
        QueryError::Output(e)
    }
}

/// Writes each decomposition as soon as the solver finds it, optionally preceded by
/// the candidate list. The first write failure is kept and later writes are skipped.
struct PrintSink<'a, W: Write> {
    out: &'a mut W,
    show_candidates: bool,
    error: Option<io::Error>,
}

impl<W: Write> PrintSink<'_, W> {
    fn write_with(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(e) = f(self.out).and_then(|()| self.out.flush()) {
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> AnagramSink for PrintSink<'_, W> {
    fn candidates(&mut self, candidates: &[String]) {
        if !self.show_candidates {
            return;
        }
        self.write_with(|out| {
            writeln!(out, "Candidate words ({}):", candidates.len())?;
            for word in candidates {
                writeln!(out, "{word}")?;
            }
            writeln!(out, "\nAnagrams:")
        });
    }

    fn solution(&mut self, words: &[&str]) {
        self.write_with(|out| writeln!(out, "{}", solver::solution_to_string(words)));
    }
}

fn run_anagram<W: Write>(out: &mut W, trie: &Trie, query: &str, show_candidates: bool) -> Result<(), QueryError> {
    let mut sink = PrintSink { out: &mut *out, show_candidates, error: None };
    let report = solver::solve_anagram_into(trie, query, &mut sink)?;
    if let Some(e) = sink.error {
        return Err(e.into());
    }

    if report.solution_count == 0 {
        writeln!(out, "no results for \"{}\"", report.query)?;
    }

    eprintln!(
        "time in microseconds: word list {}, sort {}, anagrams {} ({} solution(s))",
        report.timings.extract.as_micros(),
        report.timings.sort.as_micros(),
        report.timings.search.as_micros(),
        report.solution_count
    );
    Ok(())
}

fn run_jumble<W: Write>(out: &mut W, trie: &Trie, query: &str) -> Result<(), QueryError> {
    let mut write_error = None;
    let report = jumble::solve_jumble(trie, query, |word| {
        if write_error.is_none() {
            if let Err(e) = writeln!(out, "{word}") {
                write_error = Some(e);
            }
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    if report.match_count == 0 {
        writeln!(out, "no results for \"{}\"", report.query)?;
    }
    eprintln!(
        "time in microseconds: {} ({} match(es))",
        report.elapsed.as_micros(),
        report.match_count
    );
    Ok(())
}
