//! Type definitions for JSON request bodies
//!
//! The code generator hands JSON bodies to a [`TypeConverter`] so the emitted
//! Go can marshal a typed value instead of posting an opaque string. Any
//! [`NotJson`] result makes the generator fall back to a string literal.

pub mod json_to_go;

pub use json_to_go::JsonToGo;

use thiserror::Error;

/// The body text could not be parsed as JSON
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not valid JSON: {0}")]
pub struct NotJson(pub String);

/// Converts a JSON document into type definition source
pub trait TypeConverter: Send + Sync {
    /// Returns source declaring a type called `type_name` that `json` decodes into
    fn convert(&self, json: &str, type_name: &str) -> Result<String, NotJson>;
}
