//! Selector shapes, render modes and the records handed to a mount target.
//!
//! Every rendered rule targets the root element through one of two selector
//! shapes, picked by [`SelectorMode`]:
//!
//! ```text
//! attr:  *[ data-theme-color = 'dark' ] { ... }
//! class: *.data-theme-color-dark { ... }
//! ```
//!
//! The matching [`Marker`] is what the facade writes on the root element so
//! that the rule applies.

use serde::{Deserialize, Serialize};

use crate::style::Variable;

/// Prefix shared by every marker attribute and class.
pub const MARKER_PREFIX: &str = "data-theme-";

/// The type code that defers to the OS color-scheme preference.
pub const DEFAULT_KIND: &str = "default";

/// How the active theme is selected on the root element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorMode {
    /// `data-theme-<group>="<type>"` attributes.
    #[default]
    Attr,
    /// `data-theme-<group>-<type>` class tokens.
    Class,
}

impl SelectorMode {
    /// Returns the CSS selector matching `kind` of `group` in this mode.
    pub fn selector(self, group: &str, kind: &str) -> String {
        match self {
            SelectorMode::Attr => format!("*[ {}{} = '{}' ]", MARKER_PREFIX, group, kind),
            SelectorMode::Class => format!("*.{}{}-{}", MARKER_PREFIX, group, kind),
        }
    }

    /// Returns the marker that makes [`selector`](Self::selector) match.
    pub fn marker(self, group: &str, kind: &str) -> Marker {
        match self {
            SelectorMode::Attr => Marker::Attribute {
                name: format!("{}{}", MARKER_PREFIX, group),
                value: kind.to_string(),
            },
            SelectorMode::Class => Marker::Class(format!("{}{}-{}", MARKER_PREFIX, group, kind)),
        }
    }
}

/// When stylesheets are generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Render every group and type once; later activations only move markers.
    #[default]
    Css,
    /// Render only the active schema's types, on every activation.
    Js,
}

/// A theme marker written on the root element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// An attribute such as `data-theme-color="dark"`.
    Attribute { name: String, value: String },
    /// A class token such as `data-theme-color-dark`.
    Class(String),
}

impl Marker {
    /// Returns true if an attribute or class name belongs to a theme marker.
    pub fn is_marker_name(name: &str) -> bool {
        name.starts_with(MARKER_PREFIX)
    }
}

/// One group's rendered CSS.
///
/// Full renders carry only `code` and `css`. Schema-directed renders also
/// carry the selected type's variables so callers can use the values
/// without a stylesheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleSheet {
    /// Group code.
    pub code: String,
    /// Rendered CSS text.
    pub css: String,
    /// Variables of the selected type, for schema-directed renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<Variable>>,
}

impl StyleSheet {
    /// Creates a sheet without variables.
    pub fn new(code: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            css: css.into(),
            variables: None,
        }
    }

    /// Attaches the variables the sheet was rendered from.
    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// Wraps a declaration block in a rule for `selector`.
pub(crate) fn wrap_rule(selector: &str, block: &str) -> String {
    format!("{} {{\n{}\n}}", selector, block)
}

/// Wraps a rule in a `prefers-color-scheme` media query.
pub(crate) fn wrap_media(scheme: &str, rule: &str) -> String {
    format!("@media (prefers-color-scheme: {}) {{\n{}\n}}", scheme, rule)
}
