//! `railgraph distances` command - single-source distance table
//!
//! Every known station is listed, in ascending ID order. Unreachable ones
//! show `inf` (human/records) or `null` (JSON) and no predecessor.

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{cell, print_json};
use railgraph_core::error::Result;
use railgraph_core::network::Network;
use railgraph_core::records::{format_header, quoted};
use serde_json::json;

/// Execute the distances command
pub fn execute(cli: &Cli, network: &Network, from: &str) -> Result<()> {
    let paths = network.distances(from)?;
    let reachable = paths
        .distances
        .values()
        .filter(|d| d.is_finite())
        .count();

    match cli.format {
        OutputFormat::Json => {
            let rows: Vec<_> = paths
                .distances
                .iter()
                .map(|(id, distance)| {
                    json!({
                        "station": network.stop(id),
                        "distance": distance,
                        "via": paths.predecessors.get(id),
                    })
                })
                .collect();
            print_json(&json!({
                "from": network.stop(&paths.source),
                "reachable": reachable,
                "distances": rows,
            }))?;
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}{}Via", cell("Station"), cell("Distance"));
            }
            for (id, distance) in &paths.distances {
                let via = paths
                    .predecessors
                    .get(id)
                    .map(|p| network.stop(p).name)
                    .unwrap_or_else(|| "-".to_string());
                println!("{}{}{}", cell(network.stop(id).name), cell(distance), via);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "distances",
                    &[
                        ("from", quoted(from)),
                        ("source", paths.source.to_string()),
                        ("reachable", reachable.to_string()),
                    ],
                )
            );
            for (id, distance) in &paths.distances {
                let via = paths
                    .predecessors
                    .get(id)
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "D {} {} distance={} via={}",
                    id,
                    quoted(&network.stop(id).name),
                    distance,
                    via
                );
            }
        }
    }

    Ok(())
}
