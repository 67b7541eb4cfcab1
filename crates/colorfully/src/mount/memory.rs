//! An in-memory document implementing [`MountTarget`].

use indexmap::IndexMap;

use super::{MountTarget, StyleHandle};
use crate::render::{Marker, SelectorMode, StyleSheet};

/// Attribute that tags a style element as belonging to the theme.
pub const THEME_STYLE_ATTRIBUTE: &str = "data-theme-style";

/// A style element in the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadNode {
    /// Handle identifying the element.
    pub handle: StyleHandle,
    /// Group code from the `data-theme-style` tag, for theme styles.
    pub theme_style: Option<String>,
    /// Element content.
    pub css: String,
}

/// A minimal document: one root element with attributes and classes, and a
/// head holding style elements.
///
/// # Example
///
/// ```rust
/// use colorfully::{MemoryDocument, MountTarget, SelectorMode};
///
/// let mut doc = MemoryDocument::new().with_attribute("lang", "en");
/// doc.set_marker(&SelectorMode::Attr.marker("color", "dark"));
/// assert_eq!(doc.attribute("data-theme-color"), Some("dark"));
///
/// doc.clear_markers(SelectorMode::Attr);
/// assert_eq!(doc.attribute("data-theme-color"), None);
/// assert_eq!(doc.attribute("lang"), Some("en"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    attributes: IndexMap<String, String>,
    classes: Vec<String>,
    head: Vec<HeadNode>,
    next_handle: u64,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root attribute, returning the document for chaining.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Adds a root class, returning the document for chaining.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Appends a style element that doesn't belong to the theme.
    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        let handle = self.next_handle();
        self.head.push(HeadNode {
            handle,
            theme_style: None,
            css: css.into(),
        });
        self
    }

    /// Returns a root attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns all root attributes in the order they were set.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Returns the root class list.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns true if the root element carries the class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns every style element in document order.
    pub fn head(&self) -> &[HeadNode] {
        &self.head
    }

    /// Returns the theme style elements in document order.
    pub fn theme_styles(&self) -> Vec<&HeadNode> {
        self.head.iter().filter(|n| n.theme_style.is_some()).collect()
    }

    /// Returns the CSS mounted for a group, if any.
    pub fn theme_css(&self, group: &str) -> Option<&str> {
        self.head
            .iter()
            .find(|n| n.theme_style.as_deref() == Some(group))
            .map(|n| n.css.as_str())
    }

    fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    fn next_handle(&mut self) -> StyleHandle {
        self.next_handle += 1;
        StyleHandle(self.next_handle)
    }
}

impl MountTarget for MemoryDocument {
    fn clear_markers(&mut self, mode: SelectorMode) {
        match mode {
            SelectorMode::Attr => self.attributes.retain(|name, _| !Marker::is_marker_name(name)),
            SelectorMode::Class => self.classes.retain(|class| !Marker::is_marker_name(class)),
        }
    }

    fn set_marker(&mut self, marker: &Marker) {
        match marker {
            Marker::Attribute { name, value } => {
                self.attributes.insert(name.clone(), value.clone());
            }
            Marker::Class(class) => self.add_class(class.as_str()),
        }
    }

    fn mounted_styles(&self) -> Vec<StyleHandle> {
        self.theme_styles().iter().map(|n| n.handle).collect()
    }

    fn insert_styles(&mut self, sheets: &[StyleSheet]) -> Vec<StyleHandle> {
        // Every new element goes before whatever was first; with an empty
        // head that means appending.
        let mut position = 0;
        let mut handles = Vec::with_capacity(sheets.len());
        for sheet in sheets {
            let handle = self.next_handle();
            self.head.insert(
                position,
                HeadNode {
                    handle,
                    theme_style: Some(sheet.code.clone()),
                    css: sheet.css.clone(),
                },
            );
            position += 1;
            handles.push(handle);
        }
        handles
    }

    fn remove_style(&mut self, handle: StyleHandle) {
        self.head.retain(|n| n.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_markers_replace_and_clear() {
        let mut doc = MemoryDocument::new().with_attribute("data-testid", "app");
        doc.set_marker(&SelectorMode::Attr.marker("color", "dark"));
        doc.set_marker(&SelectorMode::Attr.marker("color", "light"));
        assert_eq!(doc.attribute("data-theme-color"), Some("light"));

        doc.clear_markers(SelectorMode::Attr);
        assert_eq!(doc.attributes().len(), 1);
        assert_eq!(doc.attribute("data-testid"), Some("app"));
    }

    #[test]
    fn test_class_markers_clear_only_theme_classes() {
        let mut doc = MemoryDocument::new().with_class("app");
        doc.set_marker(&SelectorMode::Class.marker("color", "dark"));
        doc.set_marker(&SelectorMode::Class.marker("color", "dark"));
        assert_eq!(doc.classes(), ["app", "data-theme-color-dark"]);

        doc.clear_markers(SelectorMode::Class);
        assert_eq!(doc.classes(), ["app"]);
    }

    #[test]
    fn test_clear_markers_leaves_other_mode_alone() {
        let mut doc = MemoryDocument::new();
        doc.set_marker(&SelectorMode::Class.marker("color", "dark"));
        doc.set_marker(&SelectorMode::Attr.marker("color", "dark"));
        doc.clear_markers(SelectorMode::Attr);
        assert!(doc.has_class("data-theme-color-dark"));
        assert!(doc.attribute("data-theme-color").is_none());
    }

    #[test]
    fn test_insert_styles_before_existing_in_order() {
        let mut doc = MemoryDocument::new().with_style("body { margin: 0; }");
        let handles = doc.insert_styles(&[
            StyleSheet::new("color", "a"),
            StyleSheet::new("spacing", "b"),
        ]);
        assert_eq!(handles.len(), 2);

        let order: Vec<_> = doc.head().iter().map(|n| n.css.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "body { margin: 0; }"]);
        assert_eq!(doc.mounted_styles(), handles);
        assert_eq!(doc.theme_css("spacing"), Some("b"));
    }

    #[test]
    fn test_insert_styles_into_empty_head() {
        let mut doc = MemoryDocument::new();
        doc.insert_styles(&[StyleSheet::new("color", "a"), StyleSheet::new("font", "b")]);
        let codes: Vec<_> = doc
            .theme_styles()
            .iter()
            .filter_map(|n| n.theme_style.as_deref())
            .collect();
        assert_eq!(codes, vec!["color", "font"]);
    }

    #[test]
    fn test_remove_style() {
        let mut doc = MemoryDocument::new().with_style("p {}");
        let handles = doc.insert_styles(&[StyleSheet::new("color", "a")]);
        doc.remove_style(handles[0]);
        doc.remove_style(handles[0]);
        assert!(doc.mounted_styles().is_empty());
        assert_eq!(doc.head().len(), 1);
    }
}
