//! curl-to-go library interface
//!
//! Converts a curl command line into Go source that performs the same HTTP
//! request with `net/http`.
//!
//! ```
//! let code = curl_to_go::convert("curl https://example.com").unwrap();
//! assert!(code.contains("http.Get(\"https://example.com\")"));
//! ```
//!
//! # Module Organization
//!
//! - [`command`] - Shell-style tokenizer and the curl flag registry
//! - [`request`] - Request model and extraction from parsed flags
//! - [`codegen`] - Go source generation
//! - [`typegen`] - Go struct inference for JSON bodies
//! - [`strings`] - Go string literal and environment variable helpers
//! - [`convert`] - The tokenize, extract, render pipeline
//! - [`errors`] - Error types (ConvertError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic for the binary

pub mod cli;
pub mod codegen;
pub mod command;
pub mod config;
pub mod context;
pub mod convert;
pub mod core;
pub mod errors;
pub mod output;
pub mod request;
pub mod status;
pub mod strings;
pub mod typegen;

pub use convert::{convert, Converter};
pub use errors::{ConvertError, Result};
