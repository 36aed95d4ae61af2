//! Command dispatch logic for railgraph

use std::time::Instant;

use crate::cli::Cli;
use railgraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), cwd = %ctx.cwd.display(), "resolve_cwd");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
