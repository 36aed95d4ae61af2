//! Railgraph Core Library
//!
//! Graph engine for rail and transit networks: adjacency lists, Dijkstra,
//! breadth-first and depth-first traversal, and path reconstruction, plus the
//! adapter that translates station names to internal identifiers.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;
pub mod network;
pub mod records;
