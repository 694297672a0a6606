//! Command-line tokenization
//!
//! - [`flags`] - Registry of curl options that take no argument
//! - [`tokenizer`] - Quote- and escape-aware splitting into flags and positionals

pub mod flags;
pub mod tokenizer;

pub use tokenizer::{tokenize, tokenize_with, FlagValue, Malformed, ParsedCommand, Unterminated};
