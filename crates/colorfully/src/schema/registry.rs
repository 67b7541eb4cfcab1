//! The registry of schemas.

use indexmap::IndexMap;

use super::schema::Schema;
use crate::error::{Result, ThemeError};
use crate::style::StyleRegistry;

/// Owns the schemas, keyed by schema code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every schema in insertion order.
    pub fn get_all(&self) -> Vec<&Schema> {
        self.schemas.values().collect()
    }

    /// Iterates over the schemas in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// Returns the schema with the given code.
    pub fn get(&self, code: &str) -> Option<&Schema> {
        self.schemas.get(code)
    }

    /// Returns a mutable reference to the schema with the given code.
    pub fn get_mut(&mut self, code: &str) -> Option<&mut Schema> {
        self.schemas.get_mut(code)
    }

    /// Creates a schema, replacing any schema with the same code.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        map: IndexMap<String, String>,
    ) {
        self.insert(Schema::new(name, code, map));
    }

    /// Inserts a prepared schema, replacing any schema with the same code.
    pub fn insert(&mut self, schema: Schema) {
        self.schemas.insert(schema.code().to_string(), schema);
    }

    /// Removes a schema. Removing an unknown code does nothing.
    pub fn delete(&mut self, code: &str) {
        self.schemas.shift_remove(code);
    }

    /// Checks that every selection of every schema exists in `styles`.
    ///
    /// Activation performs the same check lazily; call this for early
    /// error detection, e.g. right after importing a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DanglingReference`] for the first selection
    /// that points at a missing group or type.
    pub fn validate(&self, styles: &StyleRegistry) -> Result<()> {
        self.schemas
            .values()
            .try_for_each(|schema| check_schema(schema, styles))
    }

    /// Returns true if no schemas are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Returns the number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }
}

/// Checks one schema's selections against `styles`.
pub(crate) fn check_schema(schema: &Schema, styles: &StyleRegistry) -> Result<()> {
    for (group, kind) in schema.iter() {
        if styles.kind(group, kind).is_err() {
            return Err(ThemeError::DanglingReference {
                schema: schema.code().to_string(),
                group: group.clone(),
                kind: kind.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleGroup, StyleKind};

    fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(g, t)| (g.to_string(), t.to_string()))
            .collect()
    }

    fn styles() -> StyleRegistry {
        let mut color = StyleGroup::new("Color", "color");
        color.insert(StyleKind::new("Light", "light"));
        color.insert(StyleKind::new("Dark", "dark"));
        let mut styles = StyleRegistry::new();
        styles.insert(color);
        styles
    }

    #[test]
    fn test_create_and_get() {
        let mut registry = SchemaRegistry::new();
        registry.create("Night", "night", map(&[("color", "dark")]));
        let schema = registry.get("night").unwrap();
        assert_eq!(schema.name(), "Night");
        assert_eq!(schema.get("color"), Some("dark"));
        assert!(registry.get("day").is_none());
    }

    #[test]
    fn test_create_replaces_in_place() {
        let mut registry = SchemaRegistry::new();
        registry.create("Day", "day", map(&[("color", "light")]));
        registry.create("Night", "night", map(&[("color", "dark")]));
        registry.create("Daylight", "day", map(&[("color", "light")]));

        let codes: Vec<_> = registry.iter().map(Schema::code).collect();
        assert_eq!(codes, vec!["day", "night"]);
        assert_eq!(registry.get("day").unwrap().name(), "Daylight");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut registry = SchemaRegistry::new();
        registry.create("Night", "night", map(&[("color", "dark")]));
        registry.delete("night");
        registry.delete("night");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_validate_ok() {
        let mut registry = SchemaRegistry::new();
        registry.create("Night", "night", map(&[("color", "dark")]));
        assert!(registry.validate(&styles()).is_ok());
    }

    #[test]
    fn test_validate_reports_dangling_reference() {
        let mut registry = SchemaRegistry::new();
        registry.create("Night", "night", map(&[("color", "dark")]));
        registry.create("Sepia", "sepia", map(&[("color", "sepia")]));

        let err = registry.validate(&styles()).unwrap_err();
        assert_eq!(
            err,
            ThemeError::DanglingReference {
                schema: "sepia".to_string(),
                group: "color".to_string(),
                kind: "sepia".to_string(),
            }
        );
    }
}
