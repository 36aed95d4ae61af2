use clap::Args;
use std::path::PathBuf;

/// Input files shared by every query command
#[derive(Args, Debug, Clone)]
pub struct NetworkArgs {
    /// Delimited edge file (name1;name2;distance by default)
    #[arg(long, env = "RAILGRAPH_EDGES")]
    pub edges: PathBuf,

    /// Delimited station file (id;name;line by default)
    #[arg(long)]
    pub stations: Option<PathBuf>,

    /// Insert every edge row in both directions
    #[arg(long)]
    pub symmetric: bool,
}
