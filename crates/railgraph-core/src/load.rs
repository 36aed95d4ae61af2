//! Delimited text input
//!
//! Reads header-first delimited files (`name1;name2;distance`) into edge and
//! station records, then assembles them into a `Network`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::{EdgeColumns, GraphSettings, RailConfig, StationColumns};
use crate::error::{RailError, Result};
use crate::graph::{Graph, Weight};
use crate::network::{Network, Station, StationId};

/// Header plus data rows of a delimited file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

/// One data row with its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub values: Vec<String>,
}

impl Table {
    /// Index of a named column
    pub fn column(&self, name: &str) -> Result<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                RailError::malformed_record(
                    1,
                    format!(
                        "missing column '{}' (found: {})",
                        name,
                        self.header.join(", ")
                    ),
                )
            })
    }
}

/// One validated edge row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: StationId,
    pub to: StationId,
    pub weight: Weight,
}

/// Read a header-first delimited file. Blank lines are skipped and fields
/// are trimmed; every row must have as many fields as the header.
pub fn read_delimited<R: BufRead>(reader: R, delimiter: char) -> Result<Table> {
    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let line = line.trim_start_matches('\u{feff}');
        if line.trim().is_empty() {
            continue;
        }

        let values: Vec<String> = line
            .split(delimiter)
            .map(|v| v.trim().to_string())
            .collect();

        match &header {
            None => header = Some(values),
            Some(columns) if columns.len() != values.len() => {
                return Err(RailError::malformed_record(
                    number,
                    format!("expected {} fields, found {}", columns.len(), values.len()),
                ));
            }
            Some(_) => rows.push(Row {
                line: number,
                values,
            }),
        }
    }

    let header = header.ok_or_else(|| RailError::malformed_record(1, "missing header row"))?;
    Ok(Table { header, rows })
}

/// Interpret rows as edges. An empty weight cell takes the configured
/// default; anything non-numeric or negative is `InvalidWeight`.
pub fn edge_records(table: &Table, columns: &EdgeColumns) -> Result<Vec<EdgeRecord>> {
    let from_col = table.column(&columns.from)?;
    let to_col = table.column(&columns.to)?;
    let weight_col = table.column(&columns.weight)?;
    let default_weight = Weight::new(columns.default_weight)?;

    table
        .rows
        .iter()
        .map(|row| {
            let from = required(row, from_col, &columns.from)?;
            let to = required(row, to_col, &columns.to)?;
            let raw_weight = &row.values[weight_col];
            let weight = if raw_weight.is_empty() {
                default_weight
            } else {
                raw_weight.parse::<Weight>().inspect_err(|_| {
                    tracing::warn!(line = row.line, value = %raw_weight, "rejected edge weight");
                })?
            };
            Ok(EdgeRecord {
                from: StationId::new(from),
                to: StationId::new(to),
                weight,
            })
        })
        .collect()
}

/// Interpret rows as station display records. An empty line cell means the
/// station has no line label.
pub fn station_records(table: &Table, columns: &StationColumns) -> Result<Vec<Station>> {
    let id_col = table.column(&columns.id)?;
    let name_col = table.column(&columns.name)?;
    let line_col = table.column(&columns.line).ok();

    table
        .rows
        .iter()
        .map(|row| {
            let id = required(row, id_col, &columns.id)?;
            let name = required(row, name_col, &columns.name)?;
            let line = line_col
                .map(|col| row.values[col].clone())
                .filter(|line| !line.is_empty());
            Ok(Station {
                id: StationId::new(id),
                name: name.to_string(),
                line,
            })
        })
        .collect()
}

fn required<'a>(row: &'a Row, col: usize, name: &str) -> Result<&'a str> {
    let value = row.values[col].as_str();
    if value.is_empty() {
        return Err(RailError::malformed_record(
            row.line,
            format!("empty '{}' field", name),
        ));
    }
    Ok(value)
}

/// Build a graph from validated edges
pub fn build_graph(records: Vec<EdgeRecord>, settings: &GraphSettings) -> Graph<StationId> {
    let mut graph = Graph::new();
    for record in records {
        if settings.symmetric {
            graph.insert_edge_weight(record.to.clone(), record.from.clone(), record.weight);
        }
        graph.insert_edge_weight(record.from, record.to, record.weight);
    }
    if settings.sort_adjacency {
        graph.sort_adjacency();
    }
    graph
}

fn open(path: &Path, operation: &str) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| RailError::io_operation(operation, path.display(), e))
}

/// Load edge (and optionally station) files into a `Network`
#[tracing::instrument(level = "debug", skip(config), fields(edges = %edges_path.display()))]
pub fn load_network(
    edges_path: &Path,
    stations_path: Option<&Path>,
    config: &RailConfig,
) -> Result<Network> {
    let start = Instant::now();

    let table = read_delimited(
        open(edges_path, "read edges")?,
        config.edges.delimiter_char()?,
    )?;
    let records = edge_records(&table, &config.edges)?;
    let graph = build_graph(records, &config.graph);
    crate::trace_time!(start, "load_edges", edges = graph.edge_count());

    let network = match stations_path {
        Some(path) => {
            let table = read_delimited(
                open(path, "read stations")?,
                config.stations.delimiter_char()?,
            )?;
            let stations = station_records(&table, &config.stations)?;
            Network::new(graph, stations)
        }
        None => Network::identity(graph),
    };

    crate::trace_time!(start, "load_network");
    Ok(network)
}
