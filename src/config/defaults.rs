//! Default values for new plugins

use anyhow::{anyhow, Context, Result};
use pints_plugin_generator::config::{DEFAULT_ROOT, DEFAULT_STAGING_COLUMNS, DEFAULT_VERSION};
use pints_plugin_generator::validation::parse_columns;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Values used for any flag left off the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldDefaults {
    /// Parent directory for new plugin folders
    pub root: PathBuf,

    /// Version written into new manifests
    pub plugin_version: String,

    /// Staging columns as `name:TYPE` tokens
    pub staging_columns: Vec<String>,
}

impl ScaffoldDefaults {
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(anyhow!("Default root cannot be empty"));
        }

        if self.plugin_version.trim().is_empty() {
            return Err(anyhow!("Default plugin version cannot be empty"));
        }

        parse_columns(self.staging_columns.as_slice())
            .context("Invalid default staging columns")?;

        Ok(())
    }
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            plugin_version: DEFAULT_VERSION.to_string(),
            staging_columns: DEFAULT_STAGING_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
