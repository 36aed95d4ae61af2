//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, NetworkArgs};
use railgraph_core::config::RailConfig;
use railgraph_core::error::Result;
use railgraph_core::load::load_network;
use railgraph_core::network::Network;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { cli, cwd, start }
    }

    /// Resolve configuration, then apply per-command overrides
    pub fn config(&self, args: &NetworkArgs) -> Result<RailConfig> {
        let mut config = RailConfig::discover(self.cli.config.as_deref(), &self.cwd)?;
        if args.symmetric {
            config.graph.symmetric = true;
        }
        Ok(config)
    }

    pub fn load_network(&self, args: &NetworkArgs) -> Result<Network> {
        let config = self.config(args)?;
        trace_command!(self.cli, self.start, "resolve_config");

        let network = load_network(&args.edges, args.stations.as_deref(), &config)?;
        trace_command!(self.cli, self.start, "load_network");
        Ok(network)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("railgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest routes and traversals over rail networks.");
        println!();
        println!("Run `railgraph --help` for usage information.");
        Ok(())
    }
}
