//! Path reconstruction from predecessor maps

use crate::error::{RailError, Result};
use crate::graph::types::NodeId;
use std::collections::BTreeMap;

/// Walk predecessor links back from `target` to `source`.
///
/// The map must carry `source -> source`; the walk checks for the source
/// before following a link. A target with no entry, a link to a node with no
/// entry, or a chain that never reaches the source all yield `NoPath`.
pub fn reconstruct_path<N: NodeId>(
    predecessors: &BTreeMap<N, N>,
    source: &N,
    target: &N,
) -> Result<Vec<N>> {
    if !predecessors.contains_key(target) {
        return Err(RailError::no_path(source, target));
    }

    let mut path = Vec::new();
    let mut current = target;

    loop {
        path.push(current.clone());
        if current == source {
            break;
        }
        // Longer than the map means the chain loops without hitting source
        if path.len() > predecessors.len() {
            return Err(RailError::no_path(source, target));
        }
        current = predecessors
            .get(current)
            .ok_or_else(|| RailError::no_path(source, target))?;
    }

    path.reverse();
    Ok(path)
}
