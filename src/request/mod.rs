//! Request extraction
//!
//! Turns a [`ParsedCommand`](crate::command::ParsedCommand) into the
//! language-agnostic [`Request`] model consumed by the code generator.

pub mod extract;
pub mod model;

pub use extract::extract;
pub use model::{
    BasicAuth, Body, BodyEncoding, Header, Headers, Payload, Request, DEFAULT_CONTENT_TYPE,
    PASSWORD_PLACEHOLDER,
};
