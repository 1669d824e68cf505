//! PINTS plugin scaffolding
//!
//! Creates the starter files of a new PINTS SQL plugin: a manifest describing
//! the staging table and actions, the schema, materialize and export SQL, a
//! README and a smoke test.

pub mod cli;
pub mod config;
pub mod utils;

pub use config::{Config, ScaffoldDefaults};
pub use pints_plugin_generator::{
    DerivedConventions, GeneratedFile, GenerationResult, PluginGenerator, PluginRequest,
    ScaffoldError, StagingColumn,
};

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Raw options for a new plugin; `None` falls back to the configured defaults
#[derive(Debug, Clone, Default)]
pub struct NewPluginOptions {
    pub name: String,
    pub title: Option<String>,
    pub root: Option<PathBuf>,
    pub version: Option<String>,
    pub staging_columns: Option<Vec<String>>,
}

/// Main application context tying configuration to the generator
pub struct PluginScaffold {
    config: Config,
    generator: PluginGenerator,
}

impl PluginScaffold {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            generator: PluginGenerator::new(),
        }
    }

    /// Merge options with configured defaults and validate them
    pub fn build_request(&self, options: NewPluginOptions) -> Result<PluginRequest> {
        let defaults = &self.config.defaults;

        let root = options.root.unwrap_or_else(|| defaults.root.clone());
        let root = utils::expand_path(&root)?;

        let mut builder = PluginRequest::builder(options.name)
            .root(root)
            .version(
                options
                    .version
                    .unwrap_or_else(|| defaults.plugin_version.clone()),
            )
            .staging_columns(
                options
                    .staging_columns
                    .unwrap_or_else(|| defaults.staging_columns.clone()),
            );
        if let Some(title) = options.title {
            builder = builder.title(title);
        }

        Ok(builder.build()?)
    }

    /// Write the plugin skeleton
    pub fn create(&self, request: &PluginRequest) -> Result<GenerationResult> {
        info!(
            "Creating plugin '{}' with {} staging columns",
            request.name(),
            request.staging_columns().len()
        );
        Ok(self.generator.generate(request)?)
    }

    /// Report what [`PluginScaffold::create`] would write
    pub fn dry_run(&self, request: &PluginRequest) -> Result<GenerationResult> {
        info!("Dry run for plugin '{}'", request.name());
        Ok(self.generator.dry_run(request)?)
    }
}
