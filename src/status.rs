//! Exit status codes for the CLI
//!
//! curl-to-go follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (not a curl command, unreadable input, bad config)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Code was generated and written to stdout
    Success = 0,
    /// Any error
    Error = 1,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
