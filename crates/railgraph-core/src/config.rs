//! Configuration for railgraph
//!
//! Configuration is a TOML file describing the input layout and how the graph
//! is built from it. Every field has a default, so an empty file (or no file)
//! is valid.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{RailError, Result};
use crate::graph::Weight;

pub use types::{EdgeColumns, GraphSettings, RailConfig, StationColumns};

const CONFIG_DIR: &str = "railgraph";
const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "railgraph.toml";
const CONFIG_ENV_VAR: &str = "RAILGRAPH_CONFIG";

impl RailConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RailError::io_operation("read config", path.display(), e))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: RailConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration in order: explicit path, `RAILGRAPH_CONFIG`,
    /// `railgraph.toml` in `cwd`, the user config directory, defaults.
    ///
    /// Explicit locations must exist; implicit ones are skipped when absent.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&env_path));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                return Self::load(&global);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        parse_delimiter("edges.delimiter", &self.edges.delimiter)?;
        parse_delimiter("stations.delimiter", &self.stations.delimiter)?;
        Weight::new(self.edges.default_weight)?;
        Ok(())
    }
}

impl EdgeColumns {
    pub fn delimiter_char(&self) -> Result<char> {
        parse_delimiter("edges.delimiter", &self.delimiter)
    }
}

impl StationColumns {
    pub fn delimiter_char(&self) -> Result<char> {
        parse_delimiter("stations.delimiter", &self.delimiter)
    }
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn parse_delimiter(context: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail_invalid!(context, format!("{:?} (expected a single character)", value)),
    }
}
