use crate::error::Result;
use crate::graph::algos::{dijkstra, traversal};
use crate::graph::types::{
    AdjacencyMatrix, Edge, NodeId, ShortestPaths, Traversal, TraversalOrder, Weight,
};
use std::collections::{BTreeMap, BTreeSet};

/// Directed, weighted graph stored as adjacency lists.
///
/// Edges are appended in insertion order; call `sort_adjacency` before any
/// run whose visit order must be reproducible. Undirected connections are
/// two directed insertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: NodeId> {
    adjacency: BTreeMap<N, Vec<Edge<N>>>,
    /// Sources and targets alike; leaves have no adjacency entry
    nodes: BTreeSet<N>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            nodes: BTreeSet::new(),
        }
    }

    /// Append `from -> to` with a raw weight, rejecting negative or
    /// non-finite values.
    pub fn insert_edge(&mut self, from: N, to: N, weight: f64) -> Result<()> {
        let weight = Weight::new(weight)?;
        self.insert_edge_weight(from, to, weight);
        Ok(())
    }

    /// Append `from -> to` with the default weight of 1
    pub fn insert_unit_edge(&mut self, from: N, to: N) {
        self.insert_edge_weight(from, to, Weight::DEFAULT);
    }

    /// Append `from -> to` with an already validated weight
    pub fn insert_edge_weight(&mut self, from: N, to: N, weight: Weight) {
        tracing::trace!(from = %from, to = %to, weight = %weight, "insert_edge");
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
    }

    /// Insert `from -> to` and `to -> from` with the same weight
    pub fn insert_undirected_edge(&mut self, a: N, b: N, weight: f64) -> Result<()> {
        let weight = Weight::new(weight)?;
        self.insert_edge_weight(a.clone(), b.clone(), weight);
        self.insert_edge_weight(b, a, weight);
        Ok(())
    }

    /// Sort every adjacency list by (neighbor, weight)
    pub fn sort_adjacency(&mut self) {
        for edges in self.adjacency.values_mut() {
            edges.sort();
        }
    }

    /// Outgoing edges of `node`; empty for leaves and unknown nodes
    pub fn neighbors(&self, node: &N) -> &[Edge<N>] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// All known nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn adjacency(&self) -> &BTreeMap<N, Vec<Edge<N>>> {
        &self.adjacency
    }

    /// Dense matrix view; a cell holds the first matching edge's weight
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<N> {
        let nodes: Vec<N> = self.nodes.iter().cloned().collect();
        let cells = nodes
            .iter()
            .map(|from| {
                let edges = self.neighbors(from);
                nodes
                    .iter()
                    .map(|to| edges.iter().find(|e| &e.to == to).map(|e| e.weight))
                    .collect()
            })
            .collect();
        AdjacencyMatrix { nodes, cells }
    }

    /// Single-source Dijkstra over the whole reachable graph
    pub fn shortest_paths(&self, source: &N) -> Result<ShortestPaths<N>> {
        dijkstra::shortest_paths(self, source)
    }

    /// Target-bounded Dijkstra returning the distance and the path
    pub fn shortest_path_to(&self, source: &N, target: &N) -> Result<(Weight, Vec<N>)> {
        dijkstra::shortest_path_to(self, source, target)
    }

    pub fn traverse(&self, source: &N, order: TraversalOrder) -> Result<Traversal<N>> {
        traversal::traverse(self, source, order)
    }
}

impl<N: NodeId> Extend<(N, N, Weight)> for Graph<N> {
    fn extend<I: IntoIterator<Item = (N, N, Weight)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.insert_edge_weight(from, to, weight);
        }
    }
}

impl<N: NodeId> FromIterator<(N, N, Weight)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N, Weight)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}
