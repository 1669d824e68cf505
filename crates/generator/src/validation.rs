//! Validation rules for plugin names and staging column tokens

use crate::config::{COLUMN_SEPARATOR, NAME_PATTERN};
use crate::error::{Result, ScaffoldError};
use crate::request::StagingColumn;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{NAME_PATTERN}$")).expect("plugin name pattern is valid")
});

/// Check that a plugin name is snake_case
pub fn validate_name(name: &str) -> Result<()> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ScaffoldError::Naming {
            pattern: NAME_PATTERN,
        })
    }
}

/// Parse a single `name:TYPE` token.
///
/// Only the first separator splits, so `meta:STRUCT(a:INT)` keeps the whole
/// type. Both halves are trimmed and the type is uppercased.
pub fn parse_column(token: &str) -> Result<StagingColumn> {
    let (name, ty) = token
        .split_once(COLUMN_SEPARATOR)
        .ok_or_else(|| ScaffoldError::missing_separator(token))?;

    let name = name.trim();
    let ty = ty.trim().to_uppercase();
    if name.is_empty() || ty.is_empty() {
        return Err(ScaffoldError::empty_part(token));
    }

    Ok(StagingColumn::new(name, ty))
}

/// Parse every token, keeping order and duplicates
pub fn parse_columns<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<StagingColumn>> {
    tokens.iter().map(|t| parse_column(t.as_ref())).collect()
}
