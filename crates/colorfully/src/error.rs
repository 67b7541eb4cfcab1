//! Error types for theme lookup, activation and configuration loading.

use std::path::PathBuf;

/// Errors that can occur when querying, activating or loading themes.
///
/// Lookups that mutate in place ([`StyleKind::change`](crate::StyleKind::change))
/// and activation surface the `*NotFound` variants. Deletion never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// No style group is registered under this code.
    #[error("style group '{0}' not found")]
    GroupNotFound(String),

    /// The group exists but has no type with this code.
    #[error("style type '{kind}' not found in group '{group}'")]
    TypeNotFound { group: String, kind: String },

    /// The style type has no variable with this code.
    #[error("variable '{code}' not found in style type '{kind}'")]
    VariableNotFound { kind: String, code: String },

    /// No schema is registered under this code.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    /// A schema selects a group or type that the style registry doesn't have.
    #[error("schema '{schema}' references missing style '{group}' -> '{kind}'")]
    DanglingReference {
        schema: String,
        group: String,
        kind: String,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse theme config{}: {message}", path_suffix(.path))]
    Parse {
        /// Source file, when the document came from disk.
        path: Option<PathBuf>,
        /// Message from the underlying parser.
        message: String,
    },

    /// The configuration document could not be serialized.
    #[error("failed to serialize theme config: {0}")]
    Serialize(String),

    /// The configuration file could not be read.
    #[error("failed to load theme config: {message}")]
    Load { message: String },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl ThemeError {
    /// Creates a parse error without a source path.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// Returns true for the lookup failures (`*NotFound` and dangling references).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ThemeError::GroupNotFound(_)
                | ThemeError::TypeNotFound { .. }
                | ThemeError::VariableNotFound { .. }
                | ThemeError::SchemaNotFound(_)
                | ThemeError::DanglingReference { .. }
        )
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
