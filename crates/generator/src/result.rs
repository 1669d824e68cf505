//! Result types for generation operations

use std::path::PathBuf;

/// A file the generator wrote, or would write in a dry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Overall generation result
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Folder holding the plugin files
    pub plugin_dir: PathBuf,

    /// Files in emission order
    pub files: Vec<GeneratedFile>,

    /// Nothing was written to disk
    pub dry_run: bool,

    /// Wall-clock time spent rendering and writing
    pub processing_time_ms: u64,
}

impl GenerationResult {
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}
