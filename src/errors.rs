//! Error types for curl-to-go

use thiserror::Error;

/// Main error type for curl-to-go
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Not a curl command (first word must be `curl`, found `{0}`)")]
    NotACurlCommand(String),

    #[error("No curl command given")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
