//! `railgraph adjacency` command - dump the loaded graph
//!
//! Lists follow adjacency order (sorted unless `graph.sort_adjacency` is
//! off). The matrix form puts sources on rows, targets on columns.

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{cell, print_json};
use railgraph_core::bail_usage;
use railgraph_core::error::Result;
use railgraph_core::graph::AdjacencyMatrix;
use railgraph_core::network::{Network, StationId};
use railgraph_core::records::format_header;
use serde_json::json;

/// Execute the adjacency command
pub fn execute(cli: &Cli, network: &Network, matrix: bool) -> Result<()> {
    let graph = network.graph();

    if matrix {
        let matrix = graph.adjacency_matrix();
        return match cli.format {
            OutputFormat::Json => print_json(&matrix),
            OutputFormat::Human => {
                print_matrix(network, &matrix);
                Ok(())
            }
            OutputFormat::Records => {
                bail_usage!("--matrix has no records form; drop --matrix for E lines")
            }
        };
    }

    match cli.format {
        OutputFormat::Json => {
            let edges: Vec<_> = graph
                .adjacency()
                .iter()
                .flat_map(|(from, edges)| {
                    edges.iter().map(move |edge| {
                        json!({ "from": from, "to": edge.to, "weight": edge.weight })
                    })
                })
                .collect();
            print_json(&json!({
                "nodes": graph.node_count(),
                "edges": edges,
            }))?;
        }
        OutputFormat::Human => {
            for (from, edges) in graph.adjacency() {
                let targets: Vec<String> = edges
                    .iter()
                    .map(|edge| format!("{} ({})", network.stop(&edge.to).name, edge.weight))
                    .collect();
                println!("{} -> {}", network.stop(from).name, targets.join(", "));
            }
            if !cli.quiet {
                println!(
                    "{} stations, {} edges",
                    graph.node_count(),
                    graph.edge_count()
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "adjacency",
                    &[
                        ("nodes", graph.node_count().to_string()),
                        ("edges", graph.edge_count().to_string()),
                    ],
                )
            );
            for (from, edges) in graph.adjacency() {
                for edge in edges {
                    println!("E {} {} {}", from, edge.to, edge.weight);
                }
            }
        }
    }

    Ok(())
}

fn print_matrix(network: &Network, matrix: &AdjacencyMatrix<StationId>) {
    let header: Vec<String> = matrix
        .nodes
        .iter()
        .map(|id| cell(network.stop(id).name))
        .collect();
    println!("{}{}", cell(""), header.join("").trim_end());

    for (id, row) in matrix.nodes.iter().zip(&matrix.cells) {
        let cells: Vec<String> = row
            .iter()
            .map(|weight| match weight {
                Some(weight) => cell(weight),
                None => cell("-"),
            })
            .collect();
        println!("{}{}", cell(network.stop(id).name), cells.join("").trim_end());
    }
}
