use std::io::{self, Read, Write};

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, LogFormat, Shell};
use crate::codegen::is_valid_type_name;
use crate::config::Config;
use crate::context::Environment;
use crate::convert::Converter;
use crate::errors::ConvertError;
use crate::output::format_or_passthrough;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Handles argument parsing, logging setup and configuration loading, then
/// converts the curl command given on the command line or stdin.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    if let Some(shell) = parsed.generate_completions {
        generate_completions(shell, &env.program_name);
        return ExitStatus::Success;
    }

    if parsed.generate_manpage {
        return match generate_manpage() {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e, parsed.debug),
        };
    }

    init_logging(parsed.log_format.unwrap_or_default(), parsed.debug);

    let config = match Config::load(&env) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load config; using defaults");
            Config::default()
        }
    };

    let debug_mode = parsed.debug;
    match program(parsed, &config, &env) {
        Ok(status) => status,
        Err(e) => handle_error(e, debug_mode),
    }
}

/// Convert one command and write the result to stdout
pub fn program(args: Args, config: &Config, env: &Environment) -> Result<ExitStatus, ConvertError> {
    debug!(?args, config_dir = %config.config_dir.display(), "Starting conversion");

    let mut options = config.render_options();
    if let Some(ref name) = args.type_name {
        if !is_valid_type_name(name) {
            return Err(ConvertError::Argument(format!(
                "--type-name `{}` is not a usable Go type name",
                name
            )));
        }
        options.type_name = name.clone();
    }
    if args.standalone {
        options.standalone = true;
    }
    if args.no_banner {
        options.banner = false;
    }

    let input = if args.reads_stdin() {
        read_stdin(env)?
    } else {
        args.command_line()
    };

    let mut code = Converter::new(options).convert(&input)?;

    if args.gofmt || config.gofmt {
        code = format_or_passthrough(&config.gofmt_program, code);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(code.as_bytes())?;
    if !code.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(ExitStatus::Success)
}

fn read_stdin(env: &Environment) -> Result<String, ConvertError> {
    if env.stdin_isatty {
        return Err(ConvertError::EmptyInput);
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

/// Send diagnostics to stderr, filtered by `RUST_LOG` when set
fn init_logging(format: LogFormat, debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(debug);

    // A subscriber may already be installed when embedded
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.without_time().try_init(),
    };
}

fn handle_error(error: ConvertError, debug: bool) -> ExitStatus {
    if debug {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}

fn generate_completions(shell: Shell, bin_name: &str) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as ClapShell};

    let mut cmd = Args::command();
    let shell = match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

fn generate_manpage() -> Result<(), ConvertError> {
    use clap::CommandFactory;

    let man = clap_mangen::Man::new(Args::command());
    man.render(&mut io::stdout())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment {
            stdin_isatty: true,
            program_name: "curl-to-go".to_string(),
            config_dir: None,
        }
    }

    fn args(words: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("curl-to-go").chain(words.iter().copied())).unwrap()
    }

    #[test]
    fn test_invalid_type_name_is_rejected() {
        let err = program(args(&["--type-name", "not-valid", "curl example.com"]), &Config::default(), &env())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Argument(_)));
    }

    #[test]
    fn test_type_name_clashing_with_generated_code_is_rejected() {
        for name in ["func", "body"] {
            let err = program(args(&["--type-name", name, "curl example.com"]), &Config::default(), &env())
                .unwrap_err();
            assert!(matches!(err, ConvertError::Argument(_)));
        }
    }

    #[test]
    fn test_tty_stdin_without_command() {
        let err = program(args(&[]), &Config::default(), &env()).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyInput));
    }

    #[test]
    fn test_not_curl_fails() {
        let err = program(args(&["wget example.com"]), &Config::default(), &env()).unwrap_err();
        assert!(matches!(err, ConvertError::NotACurlCommand(_)));
    }

    #[test]
    fn test_help_and_version_succeed() {
        assert_eq!(run(vec!["curl-to-go".into(), "--version".into()], env()), ExitStatus::Success);
        assert_eq!(run(vec!["curl-to-go".into(), "--log-format".into(), "xml".into()], env()), ExitStatus::Error);
    }

    #[test]
    fn test_handle_error_exit_code() {
        assert_eq!(handle_error(ConvertError::EmptyInput, false), ExitStatus::Error);
    }
}
