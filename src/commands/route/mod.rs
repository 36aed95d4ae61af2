//! `railgraph route` command - shortest route between two stations
//!
//! With `--steps` the Dijkstra run is replayed between the chosen station
//! IDs and every finalized node is reported with the full distance and
//! predecessor tables at that point.

pub mod format;

use crate::cli::{Cli, OutputFormat};
use railgraph_core::error::Result;
use railgraph_core::graph::{shortest_path_steps, DijkstraStep};
use railgraph_core::network::{Network, Route, StationId};

use self::format::{output_human, output_json, output_records};

/// Execute the route command
pub fn execute(cli: &Cli, network: &Network, from: &str, to: &str, steps: bool) -> Result<()> {
    let route = network.route(from, to)?;
    let steps = if steps {
        replay_steps(network, &route)?
    } else {
        Vec::new()
    };

    match cli.format {
        OutputFormat::Json => output_json(&route, &steps)?,
        OutputFormat::Human => output_human(cli, network, &route, &steps),
        OutputFormat::Records => output_records(network, from, to, &route, &steps),
    }

    Ok(())
}

/// Re-run Dijkstra between the route's endpoint IDs, collecting snapshots
fn replay_steps(network: &Network, route: &Route) -> Result<Vec<DijkstraStep<StationId>>> {
    let (Some(first), Some(last)) = (route.stops.first(), route.stops.last()) else {
        return Ok(Vec::new());
    };

    let mut steps = Vec::new();
    let mut record = |step: &DijkstraStep<StationId>| steps.push(step.clone());
    shortest_path_steps(network.graph(), &first.id, Some(&last.id), &mut record)?;
    tracing::debug!(steps = steps.len(), "replayed dijkstra");
    Ok(steps)
}
