//! Validated plugin requests

use crate::config::{DEFAULT_ROOT, DEFAULT_STAGING_COLUMNS, DEFAULT_VERSION};
use crate::error::Result;
use crate::validation::{parse_columns, validate_name};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// A staging table column as declared on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingColumn {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

impl StagingColumn {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl std::fmt::Display for StagingColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.ty)
    }
}

/// Everything needed to scaffold one plugin. Only built through
/// [`PluginRequestBuilder::build`], so a value in hand is always valid.
#[derive(Debug, Clone)]
pub struct PluginRequest {
    name: String,
    title: String,
    root: PathBuf,
    version: String,
    staging_columns: Vec<StagingColumn>,
}

impl PluginRequest {
    /// Start a request for the given plugin name
    pub fn builder(name: impl Into<String>) -> PluginRequestBuilder {
        PluginRequestBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn staging_columns(&self) -> &[StagingColumn] {
        &self.staging_columns
    }

    /// Folder the plugin files land in
    pub fn plugin_dir(&self) -> PathBuf {
        self.root.join(&self.name)
    }
}

/// Collects raw inputs before validation
#[derive(Debug, Clone)]
pub struct PluginRequestBuilder {
    name: String,
    title: Option<String>,
    root: Option<PathBuf>,
    version: Option<String>,
    staging_tokens: Option<Vec<String>>,
}

impl PluginRequestBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            root: None,
            version: None,
            staging_tokens: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Raw `name:TYPE` tokens; an explicit empty list is kept empty
    pub fn staging_columns<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staging_tokens = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the inputs and fill in defaults
    pub fn build(self) -> Result<PluginRequest> {
        let name = self.name.trim().to_string();
        validate_name(&name)?;

        let staging_columns = match &self.staging_tokens {
            Some(tokens) => parse_columns(tokens.as_slice())?,
            None => parse_columns(&DEFAULT_STAGING_COLUMNS[..])?,
        };

        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => derive_title(&name),
        };

        let version = self
            .version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        let request = PluginRequest {
            name,
            title,
            root: self.root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            version,
            staging_columns,
        };
        debug!("Validated plugin request: {:?}", request);

        Ok(request)
    }
}

/// Turn `intra_run_components` into `Intra Run Components`.
///
/// A letter starts a word when the character before it is not a letter, so
/// digits split words too: `ms2ms` becomes `Ms2Ms`.
pub fn derive_title(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut prev_is_letter = false;

    for c in name.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if c.is_alphabetic() {
            if prev_is_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            title.push(c);
            prev_is_letter = false;
        }
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;

    #[test]
    fn test_defaults_applied() {
        let request = PluginRequest::builder("intra_run_components").build().unwrap();

        assert_eq!(request.title(), "Intra Run Components");
        assert_eq!(request.root(), &PathBuf::from("sql"));
        assert_eq!(request.version(), "0.1.0");
        assert_eq!(
            request.staging_columns(),
            &[
                StagingColumn::new("run_id", "TEXT"),
                StagingColumn::new("feature_id", "TEXT"),
                StagingColumn::new("intra_run_component_id", "TEXT"),
            ]
        );
        assert_eq!(
            request.plugin_dir(),
            PathBuf::from("sql").join("intra_run_components")
        );
    }

    #[test]
    fn test_explicit_values_kept() {
        let request = PluginRequest::builder("dqs")
            .title("Data Quality Scores")
            .root("plugins")
            .version("2.3.0-beta")
            .staging_columns(["run_id:text", "feature_id:TEXT", "score:double"])
            .build()
            .unwrap();

        assert_eq!(request.title(), "Data Quality Scores");
        assert_eq!(request.version(), "2.3.0-beta");
        assert_eq!(
            request.staging_columns()[2],
            StagingColumn::new("score", "DOUBLE")
        );
    }

    #[test]
    fn test_explicit_empty_column_list_is_allowed() {
        let request = PluginRequest::builder("empty")
            .staging_columns(Vec::<String>::new())
            .build()
            .unwrap();
        assert!(request.staging_columns().is_empty());
    }

    #[test]
    fn test_name_is_trimmed_before_validation() {
        let request = PluginRequest::builder("  dqs ").build().unwrap();
        assert_eq!(request.name(), "dqs");
    }

    #[test]
    fn test_name_checked_before_columns() {
        let err = PluginRequest::builder("BadName")
            .staging_columns(["broken"])
            .build()
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Naming { .. }));
    }

    #[test]
    fn test_blank_title_and_version_fall_back() {
        let request = PluginRequest::builder("x_y")
            .title("   ")
            .version(" ")
            .build()
            .unwrap();
        assert_eq!(request.title(), "X Y");
        assert_eq!(request.version(), "0.1.0");
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(derive_title("dqs"), "Dqs");
        assert_eq!(derive_title("intra_run_components"), "Intra Run Components");
        assert_eq!(derive_title("plugin_2"), "Plugin 2");
    }

    #[test]
    fn test_derive_title_starts_words_after_digits() {
        assert_eq!(derive_title("ms2ms"), "Ms2Ms");
        assert_eq!(derive_title("dqs_v2x"), "Dqs V2X");
        assert_eq!(derive_title("a__b"), "A  B");
    }

    #[test]
    fn test_column_display() {
        assert_eq!(StagingColumn::new("a", "INT").to_string(), "a:INT");
    }
}
