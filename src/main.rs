//! Frontier - step-by-step greedy constructions on the command line
//!
//! Runs Dijkstra, Prim and Huffman over sample or user-supplied inputs,
//! printing each step, the final result, and optional tree layouts.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use frontier_core::error::{ExitCode as FrontierExitCode, FrontierError};
use frontier_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(FrontierExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

/// Print a command error in the requested format and pick the exit code
fn report(cli: &Cli, error: &FrontierError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", error),
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Clap failed before `Cli.format` exists. With `--format json` in argv the
/// failure still goes out as a JSON envelope; otherwise clap reports it.
fn parse_failure(err: clap::Error) -> ExitCode {
    if !requests_json(std::env::args().skip(1)) {
        err.exit();
    }
    let Some(error) = envelope_error(&err) else {
        err.exit();
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Error carried by a JSON envelope; `None` for help and version output
fn envelope_error(err: &clap::Error) -> Option<FrontierError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => Some(FrontierError::UsageError(err.to_string())),
        _ => Some(FrontierError::Other(err.to_string())),
    }
}

fn requests_json<I: IntoIterator<Item = String>>(args: I) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requests_json_forms() {
        assert!(requests_json(args(&["--format", "json", "samples"])));
        assert!(requests_json(args(&["huffman", "--format=json"])));
        assert!(!requests_json(args(&["--format", "records", "prim"])));
        assert!(!requests_json(args(&["huffman", "json"])));
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = Cli::try_parse_from(["frontier", "--help"]).unwrap_err();
        assert!(envelope_error(&err).is_none());

        let err = Cli::try_parse_from(["frontier", "prim", "--bogus"]).unwrap_err();
        assert!(matches!(
            envelope_error(&err),
            Some(FrontierError::UsageError(_))
        ));
    }
}
