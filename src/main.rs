//! Railgraph - shortest routes and traversals over rail networks
//!
//! Loads a network from delimited edge (and optional station) files and
//! answers route, traversal, distance-table and adjacency queries.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use railgraph_core::error::{ExitCode as RailExitCode, RailError};
use railgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return reject_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(RailExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: RailExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Print a query failure on stderr: a JSON envelope when JSON output was
/// asked for, else one plain line unless `--quiet`.
fn report(e: &RailError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        _ if quiet => {}
        _ => eprintln!("error: {}", e),
    }
}

/// Handle a clap failure. `--format` is not parsed yet at this point, so a
/// JSON request is read from raw argv to keep scripts on the envelope.
fn reject_arguments(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !json_requested(env::args().skip(1))
    {
        err.exit();
    }

    let e = usage_error(&err);
    report(&e, OutputFormat::Json, false);
    exit_with(e.exit_code())
}

/// Map a clap failure onto the usage (exit 2) bucket where it is one
fn usage_error(err: &clap::Error) -> RailError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict => RailError::UsageError(err.to_string()),
        _ => RailError::Other(err.to_string()),
    }
}

fn json_requested(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
