//! Command implementations for all railgraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{adjacency, distances, route, traverse};
use railgraph_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Route {
                from,
                to,
                steps,
                network,
            } => {
                let network = ctx.load_network(network)?;
                route::execute(ctx.cli, &network, from, to, *steps)
            }
            Commands::Traverse {
                from,
                order,
                network,
            } => {
                let network = ctx.load_network(network)?;
                traverse::execute(ctx.cli, &network, from, *order)
            }
            Commands::Distances { from, network } => {
                let network = ctx.load_network(network)?;
                distances::execute(ctx.cli, &network, from)
            }
            Commands::Adjacency { matrix, network } => {
                let network = ctx.load_network(network)?;
                adjacency::execute(ctx.cli, &network, *matrix)
            }
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
