//! The registry of style groups and its two stylesheet renderers.
//!
//! - [`StyleRegistry::to_style_list`] renders every group and every type.
//!   Mounted once, it covers all schemas, and switching themes only moves
//!   the root element's markers.
//! - [`StyleRegistry::to_style_list_by_schema`] renders only the types a
//!   schema selects, together with their variables.

use indexmap::IndexMap;

use super::group::StyleGroup;
use super::kind::StyleKind;
use crate::error::{Result, ThemeError};
use crate::render::{SelectorMode, StyleSheet};
use crate::schema::Schema;

/// Owns the style groups, keyed by group code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    groups: IndexMap<String, StyleGroup>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every group in insertion order.
    pub fn get_all(&self) -> Vec<&StyleGroup> {
        self.groups.values().collect()
    }

    /// Iterates over the groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleGroup> {
        self.groups.values()
    }

    /// Returns the group with the given code.
    pub fn get(&self, code: &str) -> Option<&StyleGroup> {
        self.groups.get(code)
    }

    /// Returns a mutable reference to the group with the given code.
    pub fn get_mut(&mut self, code: &str) -> Option<&mut StyleGroup> {
        self.groups.get_mut(code)
    }

    /// Creates a group from copies of `kinds`, replacing any group with the same code.
    pub fn create<'a, I>(&mut self, name: impl Into<String>, code: impl Into<String>, kinds: I)
    where
        I: IntoIterator<Item = &'a StyleKind>,
    {
        let mut group = StyleGroup::new(name, code);
        for kind in kinds {
            group.insert(kind.clone());
        }
        self.insert(group);
    }

    /// Inserts a prepared group, replacing any group with the same code.
    pub fn insert(&mut self, group: StyleGroup) {
        self.groups.insert(group.code().to_string(), group);
    }

    /// Removes a group. Removing an unknown code does nothing.
    ///
    /// Schemas that select the removed group are left as they are and
    /// fail when activated.
    pub fn delete(&mut self, code: &str) {
        self.groups.shift_remove(code);
    }

    /// Returns the type selected by `group` / `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::GroupNotFound`] or [`ThemeError::TypeNotFound`].
    pub fn kind(&self, group: &str, kind: &str) -> Result<&StyleKind> {
        let owner = self
            .groups
            .get(group)
            .ok_or_else(|| ThemeError::GroupNotFound(group.to_string()))?;
        owner.get(kind).ok_or_else(|| ThemeError::TypeNotFound {
            group: group.to_string(),
            kind: kind.to_string(),
        })
    }

    /// Renders every type of every group, one sheet per group.
    ///
    /// Types within a group are separated by blank lines. A `default` type
    /// without variables renders its media-query fallback.
    pub fn to_style_list(&self, mode: SelectorMode) -> Vec<StyleSheet> {
        self.groups
            .values()
            .map(|group| StyleSheet::new(group.code(), group.render_all(mode)))
            .collect()
    }

    /// Renders the types selected by `schema`, one sheet per schema entry.
    ///
    /// Each sheet holds a single rule for the chosen type (no media-query
    /// fallback) plus a copy of that type's variables.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::GroupNotFound`] or [`ThemeError::TypeNotFound`]
    /// for the first entry that points nowhere.
    pub fn to_style_list_by_schema(&self, schema: &Schema, mode: SelectorMode) -> Result<Vec<StyleSheet>> {
        schema
            .iter()
            .map(|(group_code, kind_code)| {
                let kind = self.kind(group_code, kind_code)?;
                let group = &self.groups[group_code.as_str()];
                let css = group.render_rule(kind_code, &kind.declarations(), mode);
                let sheet = StyleSheet::new(group_code.as_str(), css)
                    .with_variables(kind.iter().cloned().collect());
                Ok::<_, ThemeError>(sheet)
            })
            .collect()
    }

    /// Returns true if no groups are registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}
