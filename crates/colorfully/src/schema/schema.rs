//! The schema record.

use indexmap::IndexMap;

/// A named mapping from group code to the active type code of that group.
///
/// # Example
///
/// ```rust
/// use colorfully::Schema;
///
/// let mut night = Schema::new("Night", "night", Default::default());
/// night.set("color", "dark");
/// night.set("spacing", "cozy");
///
/// assert_eq!(night.get("color"), Some("dark"));
/// assert_eq!(night.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    name: String,
    code: String,
    map: IndexMap<String, String>,
}

impl Schema {
    /// Creates a schema with the given group → type selections.
    pub fn new(name: impl Into<String>, code: impl Into<String>, map: IndexMap<String, String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            map,
        }
    }

    /// Returns the schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the schema.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the schema code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the full group → type map.
    pub fn map(&self) -> &IndexMap<String, String> {
        &self.map
    }

    /// Replaces the whole group → type map.
    pub fn change_map(&mut self, map: IndexMap<String, String>) {
        self.map = map;
    }

    /// Returns the type selected for a group.
    pub fn get(&self, group: &str) -> Option<&str> {
        self.map.get(group).map(String::as_str)
    }

    /// Selects a type for a group, replacing the previous selection.
    pub fn set(&mut self, group: impl Into<String>, kind: impl Into<String>) {
        self.map.insert(group.into(), kind.into());
    }

    /// Iterates over `(group, type)` selections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.map.iter()
    }

    /// Returns true if the schema selects nothing.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of selections.
    pub fn len(&self) -> usize {
        self.map.len()
    }
}
