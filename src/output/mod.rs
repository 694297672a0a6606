//! Output handling for generated code

pub mod gofmt;

pub use gofmt::{format_or_passthrough, run_gofmt, DEFAULT_GOFMT};
