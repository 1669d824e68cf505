//! Plugin manifest model
//!
//! The plugin runtime reads `manifest.yaml` by key, so field names and
//! nesting here are a wire format. Field order follows declaration order.

use crate::config::{
    CORE_COMPAT_KEY, CORE_COMPAT_RANGE, EXPORT_FILE, LICENSE, MATERIALIZE_FILE, SCHEMA_FILE,
};
use crate::conventions::DerivedConventions;
use crate::error::Result;
use crate::request::{PluginRequest, StagingColumn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub license: String,
    pub compat: BTreeMap<String, String>,
    pub schema: String,
    pub staging: Staging,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staging {
    pub table: String,
    pub columns: Vec<StagingColumn>,
    pub load: LoadOptions,
}

/// CSV options for filling the staging table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub header: bool,
    pub delimiter: String,
    pub autodetect: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            header: true,
            delimiter: ",".to_string(),
            autodetect: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ActionKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// The action returns rows rather than mutating tables
    Select,
}

impl Manifest {
    pub fn new(request: &PluginRequest, conventions: &DerivedConventions) -> Self {
        let mut compat = BTreeMap::new();
        compat.insert(CORE_COMPAT_KEY.to_string(), CORE_COMPAT_RANGE.to_string());

        Self {
            name: request.name().to_string(),
            version: request.version().to_string(),
            license: LICENSE.to_string(),
            compat,
            schema: SCHEMA_FILE.to_string(),
            staging: Staging {
                table: conventions.staging_table.clone(),
                columns: request.staging_columns().to_vec(),
                load: LoadOptions::default(),
            },
            actions: vec![
                Action {
                    name: "materialize".to_string(),
                    file: MATERIALIZE_FILE.to_string(),
                    kind: None,
                },
                Action {
                    name: "export".to_string(),
                    file: EXPORT_FILE.to_string(),
                    kind: Some(ActionKind::Select),
                },
            ],
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
