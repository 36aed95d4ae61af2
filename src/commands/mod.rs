//! CLI commands for railgraph

pub mod adjacency;
pub mod dispatch;
pub mod distances;
pub mod format;
pub mod route;
pub mod traverse;
