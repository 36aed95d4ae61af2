//! Station-level view of a graph
//!
//! The graph engine only sees opaque `StationId`s. `Network` owns the two
//! lookup tables (display name -> IDs, ID -> station record) and translates
//! at the boundary: names in, stops out.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RailError, Result};
use crate::graph::{Graph, ShortestPaths, TraversalOrder, Weight};

/// Opaque internal identifier of a station
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        StationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(id: &str) -> Self {
        StationId::new(id)
    }
}

/// Display record for one station ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

/// One translated entry of a result sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub id: StationId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

/// Shortest route between two named stations
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub distance: Weight,
    pub stops: Vec<Stop>,
}

impl Route {
    /// Number of adjacent stop pairs on two different known lines
    pub fn line_changes(&self) -> usize {
        self.stops
            .windows(2)
            .filter(|pair| match (&pair[0].line, &pair[1].line) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            })
            .count()
    }
}

#[derive(Debug)]
pub struct Network {
    graph: Graph<StationId>,
    stations: BTreeMap<StationId, Station>,
    by_name: HashMap<String, Vec<StationId>>,
}

impl Network {
    /// Wrap a graph with station records. Graph IDs without a record
    /// translate to themselves.
    pub fn new(graph: Graph<StationId>, stations: impl IntoIterator<Item = Station>) -> Self {
        let mut records: BTreeMap<StationId, Station> = stations
            .into_iter()
            .map(|station| (station.id.clone(), station))
            .collect();

        for id in graph.nodes() {
            records.entry(id.clone()).or_insert_with(|| Station {
                id: id.clone(),
                name: id.to_string(),
                line: None,
            });
        }

        let mut by_name: HashMap<String, Vec<StationId>> = HashMap::new();
        for station in records.values() {
            by_name
                .entry(station.name.clone())
                .or_default()
                .push(station.id.clone());
        }

        tracing::debug!(
            stations = records.len(),
            names = by_name.len(),
            edges = graph.edge_count(),
            "network built"
        );

        Self {
            graph,
            stations: records,
            by_name,
        }
    }

    /// Network whose IDs are already display names
    pub fn identity(graph: Graph<StationId>) -> Self {
        Self::new(graph, std::iter::empty())
    }

    pub fn graph(&self) -> &Graph<StationId> {
        &self.graph
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// IDs carrying `name`, in ascending ID order
    pub fn resolve(&self, name: &str) -> Result<&[StationId]> {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| RailError::unknown_station(name))
    }

    /// Display form of an internal ID
    pub fn stop(&self, id: &StationId) -> Stop {
        match self.stations.get(id) {
            Some(station) => Stop {
                id: station.id.clone(),
                name: station.name.clone(),
                line: station.line.clone(),
            },
            None => Stop {
                id: id.clone(),
                name: id.to_string(),
                line: None,
            },
        }
    }

    pub fn stops(&self, ids: &[StationId]) -> Vec<Stop> {
        ids.iter().map(|id| self.stop(id)).collect()
    }

    /// Cheapest route between two names, trying every ID pair they resolve
    /// to. IDs with a station record but no edges are skipped. The first
    /// cheapest pair wins on ties.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn route(&self, from: &str, to: &str) -> Result<Route> {
        let sources = self.resolve(from)?;
        let targets = self.resolve(to)?;

        let mut best: Option<(Weight, Vec<StationId>)> = None;
        for source in sources.iter().filter(|id| self.graph.contains(id)) {
            let paths = self.graph.shortest_paths(source)?;
            for target in targets {
                let Some(distance) = paths.distance_to(target) else {
                    continue;
                };
                if !distance.is_finite() {
                    continue;
                }
                if best.as_ref().is_none_or(|(min, _)| distance < *min) {
                    best = Some((distance, paths.path_to(target)?));
                }
            }
        }

        let (distance, path) = best.ok_or_else(|| RailError::no_path(from, to))?;
        Ok(Route {
            distance,
            stops: self.stops(&path),
        })
    }

    /// Traversal from the first graph ID `from` resolves to
    pub fn explore(&self, from: &str, order: TraversalOrder) -> Result<Vec<Stop>> {
        let traversal = self.graph.traverse(self.first_id(from)?, order)?;
        Ok(self.stops(&traversal.visited))
    }

    /// Full distance and predecessor table from the first graph ID `from`
    /// resolves to
    pub fn distances(&self, from: &str) -> Result<ShortestPaths<StationId>> {
        self.graph.shortest_paths(self.first_id(from)?)
    }

    /// First ID carrying `name` that the graph knows. A name whose IDs all
    /// lack edges reports the first of them as `UnknownNode`.
    fn first_id(&self, name: &str) -> Result<&StationId> {
        let ids = self.resolve(name)?;
        if let Some(id) = ids.iter().find(|id| self.graph.contains(id)) {
            return Ok(id);
        }
        match ids.first() {
            Some(id) => Err(RailError::unknown_node(id)),
            None => Err(RailError::unknown_station(name)),
        }
    }
}
