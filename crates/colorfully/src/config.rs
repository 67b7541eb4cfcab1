//! The serializable configuration document.
//!
//! A configuration document describes every style group and schema of a
//! theme. It is what [`Theme::import`](crate::Theme::import) reads and
//! [`Theme::export`](crate::Theme::export) produces:
//!
//! ```yaml
//! styles:
//!   - name: Color
//!     code: color
//!     types:
//!       - name: Default
//!         code: default
//!         variables: []
//!       - name: Dark
//!         code: dark
//!         variables:
//!           - { name: Background, code: --bg, value: "#000" }
//! schemas:
//!   - name: Night
//!     code: night
//!     map: { color: dark }
//! ```
//!
//! Documents load from JSON or YAML, either from a string or from a file
//! whose extension (`.json`, `.yaml`, `.yml`) picks the format.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::schema::Schema;
use crate::style::{StyleGroup, StyleKind, Variable};

/// Recognized configuration file extensions.
pub const CONFIG_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// A full theme configuration: style groups and schemas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Style groups, in registry order.
    #[serde(default)]
    pub styles: Vec<StyleConfig>,
    /// Schemas, in registry order.
    #[serde(default)]
    pub schemas: Vec<SchemaConfig>,
}

/// One style group of a [`ThemeConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub types: Vec<KindConfig>,
}

/// One style type of a [`StyleConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindConfig {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// One schema of a [`ThemeConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub map: IndexMap<String, String>,
}

impl ThemeConfig {
    /// Parses a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the JSON is malformed or doesn't
    /// match the document shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ThemeError::parse(e.to_string()))
    }

    /// Parses a document from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the YAML is malformed or doesn't
    /// match the document shape.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::parse(e.to_string()))
    }

    /// Loads a document from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Load`] if the file can't be read or has an
    /// unrecognized extension, and [`ThemeError::Parse`] (carrying the path)
    /// if its content doesn't parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();
        if !CONFIG_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ThemeError::Load {
                message: format!(
                    "Unsupported config extension for {} (expected one of {})",
                    path.display(),
                    CONFIG_EXTENSIONS.join(", ")
                ),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let parsed = if extension == ".json" {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        parsed.map_err(|err| match err {
            ThemeError::Parse { message, .. } => ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ThemeError::Serialize(e.to_string()))
    }

    /// Serializes the document as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ThemeError::Serialize(e.to_string()))
    }
}

impl From<&StyleGroup> for StyleConfig {
    fn from(group: &StyleGroup) -> Self {
        Self {
            name: group.name().to_string(),
            code: group.code().to_string(),
            types: group.iter().map(KindConfig::from).collect(),
        }
    }
}

impl From<&StyleKind> for KindConfig {
    fn from(kind: &StyleKind) -> Self {
        Self {
            name: kind.name().to_string(),
            code: kind.code().to_string(),
            variables: kind.iter().cloned().collect(),
        }
    }
}

impl From<&KindConfig> for StyleKind {
    fn from(config: &KindConfig) -> Self {
        StyleKind::with_variables(config.name.as_str(), config.code.as_str(), &config.variables)
    }
}

impl From<&Schema> for SchemaConfig {
    fn from(schema: &Schema) -> Self {
        Self {
            name: schema.name().to_string(),
            code: schema.code().to_string(),
            map: schema.map().clone(),
        }
    }
}

impl From<&SchemaConfig> for Schema {
    fn from(config: &SchemaConfig) -> Self {
        Schema::new(config.name.as_str(), config.code.as_str(), config.map.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r##"
styles:
  - name: Color
    code: color
    types:
      - name: Default
        code: default
      - name: Dark
        code: dark
        variables:
          - { name: Background, code: --bg, value: "#000" }
          - { name: Text, code: --fg, value: "#eee" }
schemas:
  - name: Night
    code: night
    map:
      color: dark
"##;

    #[test]
    fn test_from_yaml() {
        let config = ThemeConfig::from_yaml(YAML).unwrap();
        assert_eq!(config.styles.len(), 1);
        let color = &config.styles[0];
        assert_eq!(color.types.len(), 2);
        assert!(color.types[0].variables.is_empty());
        assert_eq!(color.types[1].variables[1].code, "--fg");
        assert_eq!(config.schemas[0].map.get("color").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_from_json() {
        let config = ThemeConfig::from_json(
            r#"{
                "styles": [{ "name": "Color", "code": "color", "types": [] }],
                "schemas": [{ "name": "Night", "code": "night", "map": { "color": "dark" } }]
            }"#,
        )
        .unwrap();
        assert_eq!(config.styles[0].code, "color");
        assert_eq!(config.schemas[0].code, "night");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config = ThemeConfig::from_json("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = ThemeConfig::from_yaml("styles: [").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_json_wrong_shape() {
        let err = ThemeConfig::from_json(r#"{ "styles": [{ "code": "color" }] }"#).unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
    }

    #[test]
    fn test_json_and_yaml_agree() {
        let config = ThemeConfig::from_yaml(YAML).unwrap();
        let json = config.to_json().unwrap();
        assert_eq!(ThemeConfig::from_json(&json).unwrap(), config);
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ThemeConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_kind_conversion_copies_variables() {
        let config = ThemeConfig::from_yaml(YAML).unwrap();
        let kind = StyleKind::from(&config.styles[0].types[1]);
        assert_eq!(kind.code(), "dark");
        assert_eq!(kind.declarations(), "--bg: #000;\n--fg: #eee;");
        assert_eq!(KindConfig::from(&kind), config.styles[0].types[1]);
    }
}
