//! Fixed conventions shared by every generated plugin

/// Parent directory for new plugin folders
pub const DEFAULT_ROOT: &str = "sql";

/// Initial version written into the manifest
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Staging columns used when none are given, geared to component mapping plugins
pub const DEFAULT_STAGING_COLUMNS: [&str; 3] = [
    "run_id:TEXT",
    "feature_id:TEXT",
    "intra_run_component_id:TEXT",
];

/// License declared in every manifest
pub const LICENSE: &str = "MIT";

/// Key of the core schema compatibility entry
pub const CORE_COMPAT_KEY: &str = "pints-core-sql";

/// Supported core schema range
pub const CORE_COMPAT_RANGE: &str = ">=1.0,<2.0";

/// Pattern every plugin name has to match in full
pub const NAME_PATTERN: &str = "[a-z][a-z0-9_]*";

/// Separator between a staging column name and its type
pub const COLUMN_SEPARATOR: char = ':';

pub const MANIFEST_FILE: &str = "manifest.yaml";
pub const SCHEMA_FILE: &str = "plugin.sql";
pub const MATERIALIZE_FILE: &str = "materialize.sql";
pub const EXPORT_FILE: &str = "export.sql";
pub const README_FILE: &str = "README.md";
pub const TESTS_DIR: &str = "tests";
pub const SMOKE_FILE: &str = "smoke.sql";
