//! SQL templates for the schema, materialize and export files
//!
//! Each optional clause is its own function so the branching on
//! `has_run` / `has_feature` can be checked without rendering whole files.

use crate::clauses::Clauses;
use crate::config::{EXPORT_FILE, MATERIALIZE_FILE, SCHEMA_FILE};
use crate::conventions::DerivedConventions;
use crate::request::PluginRequest;
use chrono::{DateTime, Utc};

/// Emitted in place of the features view when no feature id is staged
pub const NO_VIEW_PLACEHOLDER: &str =
    "-- (No features join generated; add your own view if needed)";

/// Column definitions of the mapping table, primary key last
pub fn mapping_table_columns(conv: &DerivedConventions) -> Clauses {
    Clauses::new()
        .always("sample_id TEXT")
        .when(conv.has_run, "run_id TEXT NOT NULL REFERENCES runs(run_id)")
        .when(
            conv.has_feature,
            "feature_id TEXT NOT NULL REFERENCES features(feature_id)",
        )
        .always(format!("{} TEXT NOT NULL", conv.comp_col))
        .always(primary_key(conv))
}

pub fn primary_key(conv: &DerivedConventions) -> String {
    if conv.has_run_and_feature() {
        "PRIMARY KEY (run_id, feature_id)".to_string()
    } else {
        format!("PRIMARY KEY ({})", conv.comp_col)
    }
}

pub fn create_mapping_table(conv: &DerivedConventions) -> String {
    let columns = mapping_table_columns(conv).join(",\n  ");
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {columns}\n);\n",
        conv.map_table
    )
}

pub fn indexes(name: &str, conv: &DerivedConventions) -> String {
    Clauses::new()
        .always(format!(
            "CREATE INDEX IF NOT EXISTS idx_{name}_by_component ON {}({});",
            conv.map_table, conv.comp_col
        ))
        .when_with(conv.has_run, || {
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{name}_by_run ON {}(run_id);",
                conv.map_table
            )
        })
        .lines()
}

/// View joining the mapping table to `features`, or a placeholder comment
pub fn features_view(conv: &DerivedConventions) -> String {
    if !conv.has_feature {
        return format!("{NO_VIEW_PLACEHOLDER}\n");
    }

    let projection = Clauses::new()
        .always("m.sample_id")
        .when(conv.has_run, "m.run_id")
        .always(format!("m.{} AS component_id", conv.comp_col))
        .always("f.feature_id")
        .always("f.mz")
        .always("f.rt")
        .always("f.area")
        .join(", ");

    let join = Clauses::new()
        .always("f.feature_id = m.feature_id")
        .when(conv.has_run, "f.run_id = m.run_id")
        .join(" AND ");

    format!(
        "CREATE OR REPLACE VIEW {view} AS\nSELECT {projection}\nFROM {map} m\nJOIN features f ON {join};\n",
        view = conv.view_name,
        map = conv.map_table,
    )
}

/// `plugin.sql`: mapping table, indexes and the convenience view
pub fn render_schema(
    request: &PluginRequest,
    conv: &DerivedConventions,
    generated_at: DateTime<Utc>,
) -> String {
    format!(
        "-- {name}/{SCHEMA_FILE}\n\
         -- Plugin schema for: {title}\n\
         -- Generated: {stamp}\n\
         \n\
         -- Permanent mapping table (edit to your needs)\n\
         {table}\n\
         -- Helpful indexes\n\
         {indexes}\n\
         -- Convenience view (join to features if both sides exist)\n\
         {view}",
        name = request.name(),
        title = request.title(),
        stamp = generated_at.format("%Y-%m-%dT%H:%M:%SZ"),
        table = create_mapping_table(conv),
        indexes = indexes(request.name(), conv),
        view = features_view(conv),
    )
}

/// Target column list of the materialize insert
pub fn materialize_target_columns(conv: &DerivedConventions) -> String {
    Clauses::new()
        .when(conv.has_run, "sample_id")
        .when(conv.has_run, "run_id")
        .when(conv.has_feature, "feature_id")
        .always(conv.comp_col.as_str())
        .join(", ")
}

/// Select list feeding the materialize insert, aligned with the targets
pub fn materialize_select_list(conv: &DerivedConventions) -> String {
    Clauses::new()
        .when(conv.has_run, "r.sample_id")
        .when(conv.has_run, "s.run_id")
        .when(conv.has_feature, "s.feature_id")
        .always(format!("s.{}", conv.comp_col))
        .join(",\n  ")
}

/// Joins resolving `sample_id` through `runs` and checking feature/run pairs
pub fn materialize_joins(conv: &DerivedConventions) -> Clauses {
    Clauses::new()
        .when(conv.has_run, "JOIN runs r ON r.run_id = s.run_id")
        .when(
            conv.has_run_and_feature(),
            "JOIN features f ON f.feature_id = s.feature_id AND f.run_id = s.run_id",
        )
}

/// `materialize.sql`: move staged rows into the mapping table
pub fn render_materialize(request: &PluginRequest, conv: &DerivedConventions) -> String {
    let summary = if conv.has_run {
        format!(
            "Move rows from {} into {}. Derive sample_id from runs (if available).",
            conv.staging_table, conv.map_table
        )
    } else {
        format!(
            "Move rows from {} into {} (no run_id in staging; edit as needed).",
            conv.staging_table, conv.map_table
        )
    };

    let from = format!("FROM {} s", conv.staging_table);
    let joins = materialize_joins(conv);
    let source = if joins.is_empty() {
        from
    } else {
        format!("{from}\n{}", joins.join("\n"))
    };

    format!(
        "-- {name}/{MATERIALIZE_FILE}\n\
         -- {summary}\n\
         \n\
         INSERT OR REPLACE INTO {map} ({targets})\n\
         SELECT\n  {select}\n\
         {source};\n",
        name = request.name(),
        map = conv.map_table,
        targets = materialize_target_columns(conv),
        select = materialize_select_list(conv),
    )
}

/// The single export statement
pub fn export_query(conv: &DerivedConventions) -> String {
    if conv.has_feature {
        let order = Clauses::new()
            .when(conv.has_run, "run_id")
            .always("component_id")
            .always("feature_id")
            .join(", ");
        format!("SELECT * FROM {} ORDER BY {order};", conv.view_name)
    } else {
        let order = Clauses::new()
            .when(conv.has_run, "run_id")
            .always(conv.comp_col.as_str())
            .join(", ");
        format!("SELECT * FROM {} ORDER BY {order};", conv.map_table)
    }
}

/// `export.sql`: CSV-ready select
pub fn render_export(request: &PluginRequest, conv: &DerivedConventions) -> String {
    format!(
        "-- {}/{EXPORT_FILE}\n{}\n",
        request.name(),
        export_query(conv)
    )
}
