//! The leaf value of a style: one CSS variable.

use serde::{Deserialize, Serialize};

/// One themeable quantity, such as a background color.
///
/// `code` is the identity within the owning [`StyleKind`](super::StyleKind)
/// and is usually a CSS custom property name (`--bg`). It is emitted verbatim
/// as `<code>: <value>;`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Human-readable label.
    pub name: String,
    /// Identity within the owning type.
    pub code: String,
    /// CSS value, emitted verbatim.
    pub value: String,
}

impl Variable {
    /// Creates a variable.
    pub fn new(name: impl Into<String>, code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            value: value.into(),
        }
    }

    /// Formats the variable as a single CSS declaration.
    pub fn declaration(&self) -> String {
        format!("{}: {};", self.code, self.value)
    }
}
