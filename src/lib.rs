// Reusable library API shared by the CLI and the helper binaries
pub mod candidates;
pub mod dictionary;
pub mod errors;
pub mod jumble;
pub mod letter_bag;
pub mod letters;
pub mod log;
pub mod solver;
pub mod trie;
