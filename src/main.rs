//! Notesim - rank markdown notes by similarity to a target note
//!
//! Compares one target note against files and directories of candidate
//! notes, and points at the sections inside each candidate that match best.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use notesim_core::error::{ExitCode as NotesimExitCode, NotesimError};
use notesim_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(NotesimExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Parse the command line. Clap stops before `--format` is known, so a JSON
/// request is read straight from argv to report usage errors as an envelope.
fn parse_cli() -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse() {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    match usage_error(&err) {
        Some(error) if argv_requests_json(env::args().skip(1)) => {
            eprintln!("{}", error.to_json());
            Err(ExitCode::from(error.exit_code() as u8))
        }
        _ => err.exit(),
    }
}

/// `None` for help and version output, which clap prints itself
fn usage_error(err: &clap::Error) -> Option<NotesimError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => Some(NotesimError::UsageError(err.to_string().trim_end().to_string())),
    }
}

fn argv_requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
