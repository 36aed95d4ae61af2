//! Shared output formatting helpers for commands

use railgraph_core::error::Result;
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Left-aligned table cell, matching the width of the step tables
pub fn cell(value: impl std::fmt::Display) -> String {
    format!("{:<15}", value.to_string())
}
