use crate::error::{RailError, Result};
use crate::graph::path::reconstruct_path;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Anything usable as a vertex identifier.
///
/// Identifiers only need a total order (adjacency sorting and deterministic
/// map iteration), cheap cloning, and a display form for error messages.
pub trait NodeId: Ord + Clone + fmt::Debug + fmt::Display {}

impl<T: Ord + Clone + fmt::Debug + fmt::Display> NodeId for T {}

/// Cost of traversing an edge, or an accumulated path cost.
///
/// Always non-negative. `Weight::INFINITY` marks a node whose distance is
/// still unknown (or unreachable) and compares greater than any real cost.
#[derive(Debug, Clone, Copy)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const DEFAULT: Weight = Weight(1.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    /// Validate a raw edge weight
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RailError::invalid_weight(value));
        }
        // -0.0 collapses to 0.0 so equality and ordering agree
        Ok(Weight(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            write!(f, "inf")
        } else if self.0.fract() == 0.0 && self.0 < 1e15 {
            write!(f, "{}", self.0 as u64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl std::str::FromStr for Weight {
    type Err = RailError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| RailError::invalid_weight(trimmed))?;
        Weight::new(value).map_err(|_| RailError::invalid_weight(trimmed))
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// One outgoing edge in an adjacency list.
///
/// Field order matters: the derived ordering sorts by neighbor first and
/// breaks ties on weight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Edge<N> {
    pub to: N,
    pub weight: Weight,
}

/// Frontier discipline for unweighted traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Breadth-first, FIFO frontier
    #[default]
    Bfs,
    /// Depth-first, LIFO frontier
    Dfs,
}

impl std::str::FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(TraversalOrder::Bfs),
            "dfs" => Ok(TraversalOrder::Dfs),
            other => Err(format!(
                "unknown traversal order '{}' (expected: bfs, dfs)",
                other
            )),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Bfs => write!(f, "bfs"),
            TraversalOrder::Dfs => write!(f, "dfs"),
        }
    }
}

/// Output of a single-source Dijkstra run
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<N: Ord> {
    pub source: N,
    /// Every known node; unreachable ones stay at `Weight::INFINITY`
    pub distances: BTreeMap<N, Weight>,
    /// Best predecessor per reached node, with `source -> source`
    pub predecessors: BTreeMap<N, N>,
}

impl<N: crate::graph::NodeId> ShortestPaths<N> {
    /// Distance to `node`, or `None` if the node is not in the graph
    pub fn distance_to(&self, node: &N) -> Option<Weight> {
        self.distances.get(node).copied()
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance_to(node).is_some_and(|d| d.is_finite())
    }

    /// Ordered node sequence from the source to `target`
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Output of a BFS or DFS run
#[derive(Debug, Clone, Serialize)]
pub struct Traversal<N: Ord> {
    pub source: N,
    pub order: TraversalOrder,
    /// Nodes in the order they were emitted
    pub visited: Vec<N>,
    /// Discovery predecessor per emitted node, with `source -> source`.
    /// Paths built from it are discovery paths, not minimum-weight paths.
    pub predecessors: BTreeMap<N, N>,
}

impl<N: crate::graph::NodeId> Traversal<N> {
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Snapshot of Dijkstra state after one node has been finalized
#[derive(Debug, Clone, Serialize)]
pub struct DijkstraStep<N: Ord> {
    /// 1-based step number
    pub index: usize,
    /// Node selected as frontier minimum in this step
    pub current: N,
    /// Finalized distance of `current`
    pub distance: Weight,
    pub distances: BTreeMap<N, Weight>,
    pub predecessors: BTreeMap<N, N>,
}

/// Dense view of the adjacency lists, nodes in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix<N> {
    pub nodes: Vec<N>,
    /// `cells[i][j]` is the weight of the first edge `nodes[i] -> nodes[j]`
    pub cells: Vec<Vec<Option<Weight>>>,
}

impl<N: Ord> AdjacencyMatrix<N> {
    pub fn get(&self, from: &N, to: &N) -> Option<Weight> {
        let i = self.nodes.binary_search(from).ok()?;
        let j = self.nodes.binary_search(to).ok()?;
        self.cells[i][j]
    }
}
