//! Plugin skeleton rendering and emission

use crate::config::{
    EXPORT_FILE, MANIFEST_FILE, MATERIALIZE_FILE, README_FILE, SCHEMA_FILE, SMOKE_FILE, TESTS_DIR,
};
use crate::conventions::DerivedConventions;
use crate::docs::{render_readme, render_smoke};
use crate::error::{Result, ScaffoldError};
use crate::manifest::Manifest;
use crate::request::PluginRequest;
use crate::result::{GeneratedFile, GenerationResult};
use crate::sql::{render_export, render_materialize, render_schema};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// One rendered file, relative to the plugin folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// The six bodies of a plugin skeleton
#[derive(Debug, Clone)]
pub struct RenderedPlugin {
    pub files: Vec<RenderedFile>,
}

#[derive(Debug, Default)]
pub struct PluginGenerator;

impl PluginGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render every file of the skeleton without touching the filesystem
    pub fn render(
        &self,
        request: &PluginRequest,
        generated_at: DateTime<Utc>,
    ) -> Result<RenderedPlugin> {
        let conventions = DerivedConventions::derive(request);
        debug!("Derived conventions: {:?}", conventions);

        let manifest = Manifest::new(request, &conventions).to_yaml()?;

        let files = vec![
            rendered(MANIFEST_FILE, manifest),
            rendered(
                SCHEMA_FILE,
                render_schema(request, &conventions, generated_at),
            ),
            rendered(MATERIALIZE_FILE, render_materialize(request, &conventions)),
            rendered(EXPORT_FILE, render_export(request, &conventions)),
            rendered(README_FILE, render_readme(request, &conventions)),
            rendered(
                Path::new(TESTS_DIR).join(SMOKE_FILE),
                render_smoke(request),
            ),
        ];

        Ok(RenderedPlugin { files })
    }

    /// Render and write the skeleton under `<root>/<name>`
    pub fn generate(&self, request: &PluginRequest) -> Result<GenerationResult> {
        let start = Instant::now();
        let rendered = self.render(request, Utc::now())?;
        let plugin_dir = request.plugin_dir();

        info!("Writing plugin skeleton to {:?}", plugin_dir);
        let files = write_plugin(&plugin_dir, &rendered)?;

        Ok(GenerationResult {
            plugin_dir,
            files,
            dry_run: false,
            processing_time_ms: elapsed_ms(start),
        })
    }

    /// Render the skeleton and report what would be written
    pub fn dry_run(&self, request: &PluginRequest) -> Result<GenerationResult> {
        let start = Instant::now();
        let rendered = self.render(request, Utc::now())?;
        let plugin_dir = request.plugin_dir();

        let files = rendered
            .files
            .iter()
            .map(|f| GeneratedFile {
                path: plugin_dir.join(&f.relative_path),
                bytes: f.contents.len(),
            })
            .collect();

        Ok(GenerationResult {
            plugin_dir,
            files,
            dry_run: true,
            processing_time_ms: elapsed_ms(start),
        })
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn rendered(relative_path: impl Into<PathBuf>, contents: String) -> RenderedFile {
    RenderedFile {
        relative_path: relative_path.into(),
        contents,
    }
}

/// Create `plugin_dir/tests` and write every file, replacing existing ones.
///
/// Files written before a failure stay on disk.
pub fn write_plugin(plugin_dir: &Path, plugin: &RenderedPlugin) -> Result<Vec<GeneratedFile>> {
    let tests_dir = plugin_dir.join(TESTS_DIR);
    std::fs::create_dir_all(&tests_dir).map_err(|e| ScaffoldError::io(&tests_dir, e))?;

    let mut written = Vec::with_capacity(plugin.files.len());
    for file in &plugin.files {
        let path = plugin_dir.join(&file.relative_path);
        std::fs::write(&path, &file.contents).map_err(|e| ScaffoldError::io(&path, e))?;
        info!("Generated file: {:?}", path);

        written.push(GeneratedFile {
            path,
            bytes: file.contents.len(),
        });
    }

    Ok(written)
}
