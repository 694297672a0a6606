//! Environment struct (stdin detection, config location)

use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CURL_TO_GO_CONFIG_DIR";

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub stdin_isatty: bool,
    pub program_name: String,
    /// Set from `CURL_TO_GO_CONFIG_DIR`
    pub config_dir: Option<PathBuf>,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin_isatty: atty::is(atty::Stream::Stdin),
            program_name: "curl-to-go".to_string(),
            config_dir: std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from),
        }
    }
}
