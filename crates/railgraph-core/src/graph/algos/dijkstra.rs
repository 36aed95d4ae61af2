use crate::error::{RailError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{DijkstraStep, NodeId, ShortestPaths, Weight};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

/// Per-run Dijkstra state. Built fresh by `initialize` for every run and
/// never stored on the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraState<N: NodeId> {
    pub distances: BTreeMap<N, Weight>,
    pub predecessors: BTreeMap<N, N>,
    /// Nodes whose distance is final
    pub visited: BTreeSet<N>,
}

impl<N: NodeId> DijkstraState<N> {
    /// Unvisited node with the smallest finite distance.
    ///
    /// Returns `None` once every reachable node is visited. Among equal
    /// distances the first one scanned wins; the scan order is an
    /// implementation detail, so callers must not rely on a tie-break.
    pub fn frontier_minimum(&self) -> Option<(Weight, N)> {
        let mut best: Option<(Weight, &N)> = None;
        for (node, &distance) in &self.distances {
            if !distance.is_finite() || self.visited.contains(node) {
                continue;
            }
            if best.is_none_or(|(min, _)| distance < min) {
                best = Some((distance, node));
            }
        }
        best.map(|(distance, node)| (distance, node.clone()))
    }

    /// Relax every edge leaving `current` towards an unvisited neighbor
    fn relax(&mut self, graph: &Graph<N>, current: &N, base: Weight) {
        for edge in graph.neighbors(current) {
            if self.visited.contains(&edge.to) {
                continue;
            }
            let candidate = base + edge.weight;
            let known = self
                .distances
                .get(&edge.to)
                .copied()
                .unwrap_or(Weight::INFINITY);
            if candidate < known {
                self.distances.insert(edge.to.clone(), candidate);
                self.predecessors.insert(edge.to.clone(), current.clone());
            }
        }
    }

    fn into_paths(self, source: &N) -> ShortestPaths<N> {
        ShortestPaths {
            source: source.clone(),
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }
}

/// Fresh state for a run from `source`: every known node at infinity except
/// the source at zero, and `source -> source` as the only predecessor.
pub fn initialize<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<DijkstraState<N>> {
    if !graph.contains(source) {
        return Err(RailError::unknown_node(source));
    }

    let mut distances: BTreeMap<N, Weight> = graph
        .nodes()
        .map(|node| (node.clone(), Weight::INFINITY))
        .collect();
    distances.insert(source.clone(), Weight::ZERO);

    let mut predecessors = BTreeMap::new();
    predecessors.insert(source.clone(), source.clone());

    Ok(DijkstraState {
        distances,
        predecessors,
        visited: BTreeSet::new(),
    })
}

type StepObserver<'a, N> = &'a mut dyn FnMut(&DijkstraStep<N>);

/// Main loop: select, visit, relax until the frontier runs dry or `target`
/// is selected.
fn run<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: Option<&N>,
    mut observer: Option<StepObserver<'_, N>>,
) -> Result<DijkstraState<N>> {
    let start = Instant::now();
    let mut state = initialize(graph, source)?;
    let mut step = 0;

    while let Some((distance, current)) = state.frontier_minimum() {
        state.visited.insert(current.clone());
        step += 1;
        tracing::trace!(step, current = %current, distance = %distance, "settle");

        let reached_target = target.is_some_and(|t| *t == current);
        if !reached_target {
            state.relax(graph, &current, distance);
        }

        if let Some(observer) = observer.as_deref_mut() {
            observer(&DijkstraStep {
                index: step,
                current: current.clone(),
                distance,
                distances: state.distances.clone(),
                predecessors: state.predecessors.clone(),
            });
        }

        if reached_target {
            break;
        }
    }

    crate::trace_time!(start, "dijkstra", settled = state.visited.len());
    Ok(state)
}

/// Shortest distances and predecessors from `source` to every node.
///
/// Unreachable nodes keep `Weight::INFINITY` and get no predecessor.
#[tracing::instrument(level = "debug", skip_all, fields(source = %source, nodes = graph.node_count()))]
pub fn shortest_paths<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    let state = run(graph, source, None, None)?;
    Ok(state.into_paths(source))
}

/// Target-bounded variant: stops as soon as `target` is finalized and
/// returns its distance together with the path.
#[tracing::instrument(level = "debug", skip_all, fields(source = %source, target = %target))]
pub fn shortest_path_to<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
) -> Result<(Weight, Vec<N>)> {
    if !graph.contains(source) {
        return Err(RailError::unknown_node(source));
    }
    if !graph.contains(target) {
        return Err(RailError::unknown_node(target));
    }

    let state = run(graph, source, Some(target), None)?;

    if !state.visited.contains(target) {
        tracing::debug!(settled = state.visited.len(), "target unreachable");
        return Err(RailError::no_path(source, target));
    }

    let distance = state
        .distances
        .get(target)
        .copied()
        .unwrap_or(Weight::INFINITY);
    let path = reconstruct_path(&state.predecessors, source, target)?;
    Ok((distance, path))
}

/// Same algorithm, reporting a snapshot after each finalized node.
///
/// With a `target` the run stops once it is finalized, so the returned maps
/// may be partial.
pub fn shortest_path_steps<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: Option<&N>,
    observer: &mut dyn FnMut(&DijkstraStep<N>),
) -> Result<ShortestPaths<N>> {
    if let Some(target) = target {
        if !graph.contains(target) {
            return Err(RailError::unknown_node(target));
        }
    }
    let state = run(graph, source, target, Some(observer))?;
    Ok(state.into_paths(source))
}

#[cfg(test)]
mod tests;
