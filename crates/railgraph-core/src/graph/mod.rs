//! Graph construction, traversal and path-finding
//!
//! Provides the engine behind every railgraph query:
//! - `Graph` adjacency lists with deterministic ordering
//! - Dijkstra shortest paths (single-source and target-bounded)
//! - BFS and DFS traversals over `Queue` / `Stack` frontiers
//! - Path reconstruction from predecessor maps

pub mod adjacency;
pub mod algos;
pub mod frontier;
pub mod path;
pub mod types;

pub use adjacency::Graph;
pub use algos::{
    bfs, dfs, initialize, shortest_path_steps, shortest_path_to, shortest_paths, traverse,
    DijkstraState,
};
pub use frontier::{Frontier, Queue, Stack};
pub use path::reconstruct_path;
pub use types::{
    AdjacencyMatrix, DijkstraStep, Edge, NodeId, ShortestPaths, Traversal, TraversalOrder, Weight,
};
