//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Weighted shortest paths with a linear frontier-minimum scan
//! - `traversal`: Breadth-first and depth-first search

pub mod dijkstra;
pub mod traversal;

pub use dijkstra::{
    initialize, shortest_path_steps, shortest_path_to, shortest_paths, DijkstraState,
};
pub use traversal::{bfs, dfs, traverse};
