//! Naming conventions derived from a plugin request

use crate::request::{PluginRequest, StagingColumn};

pub const RUN_ID: &str = "run_id";
pub const FEATURE_ID: &str = "feature_id";

/// Columns recognised as a component identifier, in preference order
pub const COMPONENT_COLUMNS: [&str; 2] = ["intra_run_component_id", "component_id"];

/// Used when no staging column can serve as the grouping key
pub const FALLBACK_COMPONENT_COLUMN: &str = "group_id";

/// Table, view and key names every template agrees on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedConventions {
    pub staging_table: String,
    pub map_table: String,
    pub view_name: String,
    pub has_run: bool,
    pub has_feature: bool,
    pub has_component: bool,
    pub comp_col: String,
}

impl DerivedConventions {
    pub fn derive(request: &PluginRequest) -> Self {
        let name = request.name();
        let columns = request.staging_columns();

        Self {
            staging_table: format!("staging_{name}"),
            map_table: format!("{name}_map"),
            view_name: format!("v_{name}_features"),
            has_run: has_column(columns, RUN_ID),
            has_feature: has_column(columns, FEATURE_ID),
            has_component: columns
                .iter()
                .any(|c| COMPONENT_COLUMNS.contains(&c.name.as_str())),
            comp_col: component_column(columns),
        }
    }

    /// Both run and feature ids are present, so they form the key
    pub fn has_run_and_feature(&self) -> bool {
        self.has_run && self.has_feature
    }
}

fn has_column(columns: &[StagingColumn], name: &str) -> bool {
    columns.iter().any(|c| c.name == name)
}

/// First recognised component column, else the first column that is not a
/// run or feature id, else `group_id`.
fn component_column(columns: &[StagingColumn]) -> String {
    columns
        .iter()
        .find(|c| COMPONENT_COLUMNS.contains(&c.name.as_str()))
        .or_else(|| {
            columns
                .iter()
                .find(|c| c.name != RUN_ID && c.name != FEATURE_ID)
        })
        .map(|c| c.name.clone())
        .unwrap_or_else(|| FALLBACK_COMPONENT_COLUMN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(tokens: &[&str]) -> DerivedConventions {
        let request = PluginRequest::builder("dqs")
            .staging_columns(tokens.iter().copied())
            .build()
            .unwrap();
        DerivedConventions::derive(&request)
    }

    #[test]
    fn test_table_names() {
        let conv = derive(&["run_id:TEXT"]);
        assert_eq!(conv.staging_table, "staging_dqs");
        assert_eq!(conv.map_table, "dqs_map");
        assert_eq!(conv.view_name, "v_dqs_features");
    }

    #[test]
    fn test_full_id_set() {
        let conv = derive(&["run_id:TEXT", "feature_id:TEXT", "component_id:TEXT"]);
        assert!(conv.has_run);
        assert!(conv.has_feature);
        assert!(conv.has_component);
        assert!(conv.has_run_and_feature());
        assert_eq!(conv.comp_col, "component_id");
    }

    #[test]
    fn test_component_column_wins_over_earlier_columns() {
        let conv = derive(&["score:DOUBLE", "intra_run_component_id:TEXT"]);
        assert_eq!(conv.comp_col, "intra_run_component_id");
    }

    #[test]
    fn test_first_recognised_component_column_in_input_order() {
        let conv = derive(&["component_id:TEXT", "intra_run_component_id:TEXT"]);
        assert_eq!(conv.comp_col, "component_id");
    }

    #[test]
    fn test_first_other_column_used_without_component() {
        let conv = derive(&["run_id:TEXT", "score:DOUBLE"]);
        assert!(conv.has_run);
        assert!(!conv.has_feature);
        assert!(!conv.has_component);
        assert_eq!(conv.comp_col, "score");
    }

    #[test]
    fn test_single_unrecognised_column() {
        let conv = derive(&["x:INT"]);
        assert_eq!(conv.comp_col, "x");
    }

    #[test]
    fn test_fallback_without_columns() {
        let conv = derive(&[]);
        assert!(!conv.has_run);
        assert!(!conv.has_feature);
        assert_eq!(conv.comp_col, "group_id");
    }

    #[test]
    fn test_fallback_with_only_id_columns() {
        let conv = derive(&["run_id:TEXT", "feature_id:TEXT"]);
        assert_eq!(conv.comp_col, "group_id");
    }
}
