//! Documentation and smoke test templates

use crate::config::{EXPORT_FILE, MATERIALIZE_FILE};
use crate::conventions::DerivedConventions;
use crate::request::PluginRequest;

/// `README.md` for the new plugin
pub fn render_readme(request: &PluginRequest, conv: &DerivedConventions) -> String {
    let name = request.name();
    let columns = request
        .staging_columns()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"# {title} ({name})

This plugin was scaffolded by `pints-scaffold new`.

## Files
- `manifest.yaml` : declarative metadata (staging schema, actions)
- `plugin.sql`    : permanent tables/views (idempotent)
- `materialize.sql` : move data from staging into permanent tables
- `export.sql`      : CSV-ready SELECT
- `tests/smoke.sql` : tiny smoke test

## Staging schema
The wrapper will create and load the staging table from `manifest.yaml`:

- table: `{staging}`
- columns: {columns}

## Typical workflow
pints plugin install --db my.duckdb --name {name}
pints plugin load-csv --db my.duckdb --name {name} --csv example.csv
pints plugin action --db my.duckdb --name {name} --action materialize
pints plugin export --db my.duckdb --name {name} --out {name}.csv
"#,
        title = request.title(),
        staging = conv.staging_table,
    )
}

/// `tests/smoke.sql`, meant to be run by a database client from `tests/`
pub fn render_smoke(request: &PluginRequest) -> String {
    format!(
        r#"-- tests/smoke.sql for plugin {name}
-- This file assumes the plugin schema is installed.
-- It only checks basic existence and runs materialize as a no-op.

-- Show plugin tables/views (non-fatal if empty)
PRAGMA show_tables;

-- Run materialize (will no-op if staging is empty or core not present)
.read ../{MATERIALIZE_FILE}

-- Export query should parse
.read ../{EXPORT_FILE}
"#,
        name = request.name(),
    )
}
