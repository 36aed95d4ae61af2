//! Error types and exit codes for railgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/config values)
//! - 3: Data error (unknown node or station, no path, bad input rows)

mod macros;

use thiserror::Error;

/// Exit codes for the railgraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, unreachable target, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during railgraph operations
#[derive(Error, Debug)]
pub enum RailError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("unknown station: {name}")]
    UnknownStation { name: String },

    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("invalid weight: {value} (expected a non-negative number)")]
    InvalidWeight { value: String },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RailError {
    /// Create an error for a node that is not part of the graph
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        RailError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for a station name missing from the network
    pub fn unknown_station(name: impl std::fmt::Display) -> Self {
        RailError::UnknownStation {
            name: name.to_string(),
        }
    }

    /// Create an error for a target that cannot be reached from the source
    pub fn no_path(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        RailError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a negative, non-finite or non-numeric weight
    pub fn invalid_weight(value: impl std::fmt::Display) -> Self {
        RailError::InvalidWeight {
            value: value.to_string(),
        }
    }

    /// Create an error for an input row that cannot be interpreted
    pub fn malformed_record(line: usize, reason: impl std::fmt::Display) -> Self {
        RailError::MalformedRecord {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RailError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RailError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RailError::UnknownFormat(_)
            | RailError::UsageError(_)
            | RailError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            RailError::UnknownNode { .. }
            | RailError::UnknownStation { .. }
            | RailError::NoPath { .. }
            | RailError::InvalidWeight { .. }
            | RailError::MalformedRecord { .. } => ExitCode::Data,

            // Generic failures
            RailError::Io(_)
            | RailError::Json(_)
            | RailError::Toml(_)
            | RailError::FailedOperationWithTarget { .. }
            | RailError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RailError::UnknownFormat(_) => "unknown_format",
            RailError::UsageError(_) => "usage_error",
            RailError::InvalidValue { .. } => "invalid_value",
            RailError::UnknownNode { .. } => "unknown_node",
            RailError::UnknownStation { .. } => "unknown_station",
            RailError::NoPath { .. } => "no_path",
            RailError::InvalidWeight { .. } => "invalid_weight",
            RailError::MalformedRecord { .. } => "malformed_record",
            RailError::Io(_) => "io_error",
            RailError::Json(_) => "json_error",
            RailError::Toml(_) => "toml_error",
            RailError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RailError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for railgraph operations
pub type Result<T> = std::result::Result<T, RailError>;
