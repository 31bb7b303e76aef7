//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError`, `SolverError` and `DictionaryError`
//! implementations via their `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use anagrammer::dictionary::DictionaryError;
use anagrammer::errors::ParseError;
use anagrammer::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::EmptyInput,
        ParseError::InvalidChar { input: "don't".to_string(), invalid_char: '\'' },
        ParseError::InvalidLowercaseChar { invalid_char: 'X' },
    ]
}

fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::ParseFailure(Box::new(ParseError::InvalidChar {
            input: "tac0s".to_string(),
            invalid_char: '0',
        })),
        SolverError::EmptyDictionary,
    ]
}

fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![
        DictionaryError::Io {
            path: PathBuf::from("/usr/share/dict/words"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        DictionaryError::NoWords { skipped: 12 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Dictionary Errors (D001–D002)](#dictionary-errors)");
    println!("- [Solver Errors (S001–S002)](#solver-errors)");
    println!("- [Parse Errors (E001–E003)](#parse-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    generate_dictionary_error_docs();
    generate_solver_error_docs();
    generate_parse_error_docs();

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: \"tac0s\" contains non-alphabetic character '0' (E002)");
    println!("Only letters a-z are allowed (case is ignored)");
    println!("```\n");
    println!("1. Note the error code (e.g., `E002`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");

    println!("Dictionary errors end the session. Solver and parse errors only reject the current query.\n");

    println!("## Error Display Formats\n");
    println!("Errors are displayed in two formats:\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

fn generate_dictionary_error_docs() {
    println!("## Dictionary Errors\n");
    println!("Errors raised while loading the word list. Without a dictionary there is nothing to search, so these are fatal.\n");
    generate_error_docs!(all_dictionary_error_variants());
}

fn generate_solver_error_docs() {
    println!("## Solver Errors\n");
    println!("Per-query errors from the anagram and jumble solvers. These wrap lower-level parse errors or report a missing dictionary.\n");
    generate_error_docs!(all_solver_error_variants());
}

fn generate_parse_error_docs() {
    println!("## Parse Errors\n");
    println!("Errors that occur when validating a query or a dictionary word.\n");
    generate_error_docs!(all_parse_error_variants());
}
