//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};

/// curl-to-go - Convert curl commands into Go net/http code
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "curl-to-go", version, about, long_about = None)]
pub struct Args {
    /// The curl command to convert, as one quoted string or as separate words.
    /// Read from stdin when omitted or `-`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub command: Vec<String>,

    /// Name of the Go struct generated for JSON bodies
    #[arg(long = "type-name", value_name = "NAME")]
    pub type_name: Option<String>,

    /// Wrap the output in a complete `package main` program
    #[arg(long = "standalone", action = ArgAction::SetTrue)]
    pub standalone: bool,

    /// Omit the leading `// Generated by curl-to-go` comment
    #[arg(long = "no-banner", action = ArgAction::SetTrue)]
    pub no_banner: bool,

    /// Pipe the result through gofmt (falls back to unformatted output)
    #[arg(long = "gofmt", action = ArgAction::SetTrue)]
    pub gofmt: bool,

    /// Output format for diagnostics on stderr: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Debug mode (verbose logging, detailed errors)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    // =========================================================================
    // GENERATION (hidden)
    // =========================================================================

    /// Generate shell completions for the specified shell
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum, hide = true)]
    pub generate_completions: Option<Shell>,

    /// Generate man page to stdout
    #[arg(long = "generate-manpage", action = ArgAction::SetTrue, hide = true)]
    pub generate_manpage: bool,
}

impl Args {
    /// True when the command has to come from stdin
    pub fn reads_stdin(&self) -> bool {
        self.command.is_empty() || (self.command.len() == 1 && self.command[0] == "-")
    }

    /// The command words joined back into one line.
    ///
    /// A single word is passed through untouched so quoting inside it
    /// survives; separate words were already unquoted by the invoking shell
    /// and are re-quoted where needed.
    pub fn command_line(&self) -> String {
        if self.command.len() == 1 {
            return self.command[0].clone();
        }
        self.command
            .iter()
            .map(|word| shell_quote(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '@' | ',' | '+' | '%')
        });
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Shell types for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Log format for diagnostics
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
