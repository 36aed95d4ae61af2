//! Output formatting for the route command

use crate::cli::Cli;
use crate::commands::format::{cell, print_json};
use railgraph_core::error::Result;
use railgraph_core::graph::DijkstraStep;
use railgraph_core::network::{Network, Route, StationId, Stop};
use railgraph_core::records::{format_header, format_stop, quoted};
use serde_json::json;

/// Output in human-readable format
pub fn output_human(cli: &Cli, network: &Network, route: &Route, steps: &[DijkstraStep<StationId>]) {
    for step in steps {
        print_step_table(network, step);
        println!();
    }

    let path: Vec<String> = route.stops.iter().map(stop_label).collect();
    println!("{}", path.join(" -> "));
    println!("distance: {}", route.distance);

    let changes = route.line_changes();
    if changes > 0 && !cli.quiet {
        println!("line changes: {}", changes);
    }
}

fn stop_label(stop: &Stop) -> String {
    match &stop.line {
        Some(line) => format!("{} [{}]", stop.name, line),
        None => stop.name.clone(),
    }
}

/// One step as three rows: station names, distances, predecessors
fn print_step_table(network: &Network, step: &DijkstraStep<StationId>) {
    println!(
        "Step {}: {} ({})",
        step.index,
        network.stop(&step.current).name,
        step.distance
    );

    let mut names = vec![cell("Station")];
    let mut distances = vec![cell("Distance")];
    let mut predecessors = vec![cell("Predecessor")];
    for (id, distance) in &step.distances {
        names.push(cell(&network.stop(id).name));
        distances.push(cell(distance));
        predecessors.push(cell(
            step.predecessors
                .get(id)
                .map(|p| network.stop(p).name)
                .unwrap_or_else(|| "-".to_string()),
        ));
    }

    for row in [names, distances, predecessors] {
        println!("{}", row.join("\t").trim_end());
    }
}

/// Output in JSON format
pub fn output_json(route: &Route, steps: &[DijkstraStep<StationId>]) -> Result<()> {
    let mut output = json!({
        "distance": route.distance,
        "line_changes": route.line_changes(),
        "stops": route.stops,
    });

    if !steps.is_empty() {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("steps".to_string(), serde_json::to_value(steps)?);
        }
    }

    print_json(&output)
}

/// Output in records format
pub fn output_records(
    network: &Network,
    from: &str,
    to: &str,
    route: &Route,
    steps: &[DijkstraStep<StationId>],
) {
    println!(
        "{}",
        format_header(
            "route",
            &[
                ("from", quoted(from)),
                ("to", quoted(to)),
                ("distance", route.distance.to_string()),
                ("stops", route.stops.len().to_string()),
            ],
        )
    );

    for (index, stop) in route.stops.iter().enumerate() {
        println!("{}", format_stop(index, stop));
    }

    for step in steps {
        println!(
            "T {} {} distance={}",
            step.index,
            step.current,
            step.distance
        );
        for (id, distance) in &step.distances {
            let via = step
                .predecessors
                .get(id)
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "D {} {} {} distance={} via={}",
                step.index,
                id,
                quoted(&network.stop(id).name),
                distance,
                via
            );
        }
    }
}
