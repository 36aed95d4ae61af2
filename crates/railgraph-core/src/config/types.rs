//! Configuration type definitions

use serde::Deserialize;

/// Top-level railgraph configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RailConfig {
    /// Layout of the edge file
    #[serde(default)]
    pub edges: EdgeColumns,

    /// Layout of the station file
    #[serde(default)]
    pub stations: StationColumns,

    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphSettings,
}

/// Column names and delimiter for edge rows
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeColumns {
    /// Single-character field separator
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Column holding the source identifier
    #[serde(default = "default_from_column")]
    pub from: String,

    /// Column holding the target identifier
    #[serde(default = "default_to_column")]
    pub to: String,

    /// Column holding the weight
    #[serde(default = "default_weight_column")]
    pub weight: String,

    /// Weight used when the weight cell is empty
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

impl Default for EdgeColumns {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            from: default_from_column(),
            to: default_to_column(),
            weight: default_weight_column(),
            default_weight: default_weight(),
        }
    }
}

/// Column names and delimiter for station rows
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationColumns {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default = "default_id_column")]
    pub id: String,

    #[serde(default = "default_name_column")]
    pub name: String,

    #[serde(default = "default_line_column")]
    pub line: String,
}

impl Default for StationColumns {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            id: default_id_column(),
            name: default_name_column(),
            line: default_line_column(),
        }
    }
}

/// How edge rows become a graph
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphSettings {
    /// Insert every row in both directions
    #[serde(default)]
    pub symmetric: bool,

    /// Sort adjacency lists after loading
    #[serde(default = "default_sort_adjacency")]
    pub sort_adjacency: bool,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            symmetric: false,
            sort_adjacency: default_sort_adjacency(),
        }
    }
}

fn default_delimiter() -> String {
    ";".to_string()
}

fn default_from_column() -> String {
    "name1".to_string()
}

fn default_to_column() -> String {
    "name2".to_string()
}

fn default_weight_column() -> String {
    "distance".to_string()
}

fn default_weight() -> f64 {
    1.0
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_name_column() -> String {
    "name".to_string()
}

fn default_line_column() -> String {
    "line".to_string()
}

fn default_sort_adjacency() -> bool {
    true
}
