use crate::error::{RailError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::frontier::{Frontier, Queue, Stack};
use crate::graph::types::{NodeId, Traversal, TraversalOrder};
use std::collections::{BTreeMap, BTreeSet};

/// Visit every node reachable from `source` in BFS or DFS order.
///
/// Visit order follows adjacency order, so sort the graph first when the
/// order must be reproducible.
#[tracing::instrument(level = "debug", skip_all, fields(source = %source, order = %order))]
pub fn traverse<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    order: TraversalOrder,
) -> Result<Traversal<N>> {
    if !graph.contains(source) {
        return Err(RailError::unknown_node(source));
    }

    let (visited, predecessors) = match order {
        TraversalOrder::Bfs => explore(graph, source, Queue::new()),
        TraversalOrder::Dfs => explore(graph, source, Stack::new()),
    };
    tracing::debug!(visited = visited.len(), "traversal complete");

    Ok(Traversal {
        source: source.clone(),
        order,
        visited,
        predecessors,
    })
}

pub fn bfs<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<Traversal<N>> {
    traverse(graph, source, TraversalOrder::Bfs)
}

pub fn dfs<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<Traversal<N>> {
    traverse(graph, source, TraversalOrder::Dfs)
}

/// Shared loop. Frontier entries are `(node, discovered_from)` so the
/// predecessor recorded on emission is the node that actually led there.
fn explore<N, F>(graph: &Graph<N>, source: &N, mut frontier: F) -> (Vec<N>, BTreeMap<N, N>)
where
    N: NodeId,
    F: Frontier<(N, N)>,
{
    let mut emitted: BTreeSet<N> = BTreeSet::new();
    let mut visited = Vec::new();
    let mut predecessors = BTreeMap::new();

    frontier.push((source.clone(), source.clone()));

    while let Some((node, parent)) = frontier.pop() {
        if emitted.contains(&node) {
            continue;
        }
        emitted.insert(node.clone());
        visited.push(node.clone());
        predecessors.insert(node.clone(), parent);

        for edge in graph.neighbors(&node) {
            if !emitted.contains(&edge.to) {
                frontier.push((edge.to.clone(), node.clone()));
            }
        }
    }

    (visited, predecessors)
}
