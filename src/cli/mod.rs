//! CLI argument parsing for railgraph
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use railgraph_core::graph::TraversalOrder;
pub use args::NetworkArgs;
pub use output::OutputFormat;
use output::parse_output_format;
use parse::parse_traversal_order;

/// Railgraph - shortest routes and traversals over rail networks
#[derive(Parser, Debug)]
#[command(name = "railgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (overrides RAILGRAPH_CONFIG and discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest route between two stations
    Route {
        /// Departure station name
        from: String,

        /// Arrival station name
        to: String,

        /// Print the distance table after every step
        #[arg(long)]
        steps: bool,

        #[command(flatten)]
        network: NetworkArgs,
    },

    /// Visit every station reachable from a start station
    Traverse {
        /// Start station name
        from: String,

        /// Frontier discipline
        #[arg(long, default_value = "bfs", value_parser = parse_traversal_order)]
        order: TraversalOrder,

        #[command(flatten)]
        network: NetworkArgs,
    },

    /// Distance and predecessor of every station from a start station
    Distances {
        /// Start station name
        from: String,

        #[command(flatten)]
        network: NetworkArgs,
    },

    /// Show the loaded adjacency lists
    Adjacency {
        /// Print a dense matrix instead of lists
        #[arg(long)]
        matrix: bool,

        #[command(flatten)]
        network: NetworkArgs,
    },
}
