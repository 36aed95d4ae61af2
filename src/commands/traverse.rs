//! `railgraph traverse` command - BFS or DFS visit order

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use railgraph_core::error::Result;
use railgraph_core::graph::TraversalOrder;
use railgraph_core::network::Network;
use railgraph_core::records::{format_header, format_stop, quoted};
use serde_json::json;

/// Execute the traverse command
pub fn execute(cli: &Cli, network: &Network, from: &str, order: TraversalOrder) -> Result<()> {
    let stops = network.explore(from, order)?;

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "from": from,
            "order": order,
            "visited": stops,
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} from {} ({} stations)", order, from, stops.len());
            }
            for (index, stop) in stops.iter().enumerate() {
                println!("{:>3}. {}", index + 1, stop.name);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "traverse",
                    &[
                        ("from", quoted(from)),
                        ("order", order.to_string()),
                        ("visited", stops.len().to_string()),
                    ],
                )
            );
            for (index, stop) in stops.iter().enumerate() {
                println!("{}", format_stop(index, stop));
            }
        }
    }

    Ok(())
}
