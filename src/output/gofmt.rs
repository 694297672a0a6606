//! Optional gofmt post-pass
//!
//! Pipes generated code through an external `gofmt` process. Generated code
//! is valid Go without it, so any failure here degrades to returning the
//! input unchanged.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::errors::ConvertError;

/// Program used when no override is configured
pub const DEFAULT_GOFMT: &str = "gofmt";

/// Run `program` over `code`, returning the formatted source
pub fn run_gofmt(program: &str, code: &str) -> Result<String, ConvertError> {
    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // A formatter that exits early is reported through its exit status
        match stdin.write_all(code.as_bytes()) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e.into()),
            _ => {}
        }
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ConvertError::Format(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| ConvertError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Format `code`, falling back to the unformatted text on any error
pub fn format_or_passthrough(program: &str, code: String) -> String {
    match run_gofmt(program, &code) {
        Ok(formatted) => {
            debug!(program, "Formatted output");
            formatted
        }
        Err(e) => {
            warn!(program, error = %e, "gofmt unavailable; printing unformatted code");
            code
        }
    }
}
