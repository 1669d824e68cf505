//! Error types for plugin scaffolding

use std::path::PathBuf;

/// Errors raised while validating a request or emitting plugin files
#[derive(thiserror::Error, Debug)]
pub enum ScaffoldError {
    /// A staging column token is malformed
    #[error("{message}: {token}")]
    Format { message: &'static str, token: String },

    /// The plugin name does not follow the naming rule
    #[error("Plugin name must be snake_case: {pattern}")]
    Naming { pattern: &'static str },

    /// A directory could not be created or a file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

impl ScaffoldError {
    pub(crate) fn missing_separator(token: &str) -> Self {
        Self::Format {
            message: "Invalid --staging-cols entry (use name:TYPE)",
            token: token.to_string(),
        }
    }

    pub(crate) fn empty_part(token: &str) -> Self {
        Self::Format {
            message: "Invalid column spec",
            token: token.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
