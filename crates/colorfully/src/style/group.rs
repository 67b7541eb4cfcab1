//! Style groups and the selector wrapping of their declarations.
//!
//! A group is a themeable category (`color`, `spacing`) whose types are the
//! variants a schema can pick from. Rendering a type produces one rule
//! scoped to the root element's marker:
//!
//! ```text
//! *[ data-theme-color = 'dark' ] {
//! --bg: #000;
//! }
//! ```
//!
//! ## The `default` Type
//!
//! A `default` type that has no variables of its own defers to the OS
//! color-scheme preference. Instead of an empty rule, it renders one media
//! query per other type in the group, each applying that type's declarations
//! under the `default` selector:
//!
//! ```text
//! @media (prefers-color-scheme: light) {
//! *[ data-theme-color = 'default' ] {
//! --bg: #fff;
//! }
//! }
//! ```
//!
//! so `light` and `dark` values are never duplicated.

use indexmap::IndexMap;

use super::kind::StyleKind;
use super::variable::Variable;
use crate::error::{Result, ThemeError};
use crate::render::{wrap_media, wrap_rule, SelectorMode, StyleSheet, DEFAULT_KIND};
use crate::theme::ColorMode;

/// A named collection of [`StyleKind`]s, keyed by type code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleGroup {
    name: String,
    code: String,
    kinds: IndexMap<String, StyleKind>,
}

impl StyleGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            kinds: IndexMap::new(),
        }
    }

    /// Returns the group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the group.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the group code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns every type in insertion order.
    pub fn get_all(&self) -> Vec<&StyleKind> {
        self.kinds.values().collect()
    }

    /// Iterates over the types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleKind> {
        self.kinds.values()
    }

    /// Returns the type with the given code.
    pub fn get(&self, kind: &str) -> Option<&StyleKind> {
        self.kinds.get(kind)
    }

    /// Returns a mutable reference to the type with the given code.
    pub fn get_mut(&mut self, kind: &str) -> Option<&mut StyleKind> {
        self.kinds.get_mut(kind)
    }

    /// Creates a type from copies of `variables`, replacing any type with the same code.
    pub fn create<'a, I>(&mut self, name: impl Into<String>, code: impl Into<String>, variables: I)
    where
        I: IntoIterator<Item = &'a Variable>,
    {
        self.insert(StyleKind::with_variables(name, code, variables));
    }

    /// Inserts a prepared type, replacing any type with the same code.
    ///
    /// A replaced type keeps its position.
    pub fn insert(&mut self, kind: StyleKind) {
        self.kinds.insert(kind.code().to_string(), kind);
    }

    /// Removes a type. Removing an unknown code does nothing.
    pub fn delete(&mut self, kind: &str) {
        self.kinds.shift_remove(kind);
    }

    /// Returns the declaration block of one type.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::TypeNotFound`] if the group has no such type.
    pub fn declarations(&self, kind: &str) -> Result<String> {
        self.kinds
            .get(kind)
            .map(StyleKind::declarations)
            .ok_or_else(|| self.type_not_found(kind))
    }

    /// Returns the declaration block of every type, in type order.
    pub fn all_declarations(&self) -> Vec<StyleSheet> {
        self.kinds
            .values()
            .map(|kind| StyleSheet::new(kind.code(), kind.declarations()))
            .collect()
    }

    /// Wraps a declaration block in the selector for `kind`.
    ///
    /// When `kind` is `default` and `block` is empty, the result is the
    /// media-query fallback over every other type (see the module docs),
    /// separated by blank lines. A group holding only `default` renders an
    /// empty string in that case.
    pub fn render_selector(&self, kind: &str, block: &str, mode: SelectorMode) -> String {
        if kind == DEFAULT_KIND && block.is_empty() {
            let selector = mode.selector(&self.code, DEFAULT_KIND);
            return self
                .kinds
                .values()
                .filter(|other| other.code() != DEFAULT_KIND)
                .map(|other| wrap_media(other.code(), &wrap_rule(&selector, &other.declarations())))
                .collect::<Vec<_>>()
                .join("\n\n");
        }

        self.render_rule(kind, block, mode)
    }

    /// Wraps a declaration block in the selector for `kind`, never falling back.
    pub fn render_rule(&self, kind: &str, block: &str, mode: SelectorMode) -> String {
        wrap_rule(&mode.selector(&self.code, kind), block)
    }

    /// Renders every type of the group, separated by blank lines.
    pub fn render_all(&self, mode: SelectorMode) -> String {
        self.all_declarations()
            .iter()
            .map(|sheet| self.render_selector(&sheet.code, &sheet.css, mode))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Returns the variables in effect when `kind` is selected.
    ///
    /// A `default` type without variables takes the variables of the type
    /// named after the color mode (`light` or `dark`), matching what the
    /// media-query fallback does in a browser. With no mode, or no such
    /// type, it resolves to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::TypeNotFound`] if the group has no such type.
    pub fn resolve_variables(&self, kind: &str, mode: Option<ColorMode>) -> Result<Vec<Variable>> {
        let selected = self.kinds.get(kind).ok_or_else(|| self.type_not_found(kind))?;
        if kind != DEFAULT_KIND || !selected.is_empty() {
            return Ok(selected.iter().cloned().collect());
        }

        Ok(mode
            .and_then(|mode| self.kinds.get(mode.as_str()))
            .map(|preferred| preferred.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Returns true if the group has no types.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Returns the number of types.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    fn type_not_found(&self, kind: &str) -> ThemeError {
        ThemeError::TypeNotFound {
            group: self.code.clone(),
            kind: kind.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> StyleGroup {
        let mut group = StyleGroup::new("Color", "color");
        group.insert(StyleKind::new("Default", "default"));
        group.create("Light", "light", &[Variable::new("Background", "bg", "white")]);
        group.create("Dark", "dark", &[Variable::new("Background", "bg", "black")]);
        group
    }

    #[test]
    fn test_declarations_of_type() {
        assert_eq!(color().declarations("dark").unwrap(), "bg: black;");
        assert_eq!(color().declarations("default").unwrap(), "");
    }

    #[test]
    fn test_declarations_unknown_type() {
        let err = color().declarations("sepia").unwrap_err();
        assert_eq!(
            err,
            ThemeError::TypeNotFound {
                group: "color".to_string(),
                kind: "sepia".to_string(),
            }
        );
    }

    #[test]
    fn test_all_declarations_follow_type_order() {
        let all = color().all_declarations();
        let codes: Vec<_> = all.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["default", "light", "dark"]);
        assert_eq!(all[2].css, "bg: black;");
        assert!(all.iter().all(|s| s.variables.is_none()));
    }

    #[test]
    fn test_render_selector_attr() {
        let group = StyleGroup::new("Color", "color");
        assert_eq!(
            group.render_selector("dark", "a:1;", SelectorMode::Attr),
            "*[ data-theme-color = 'dark' ] {\na:1;\n}"
        );
    }

    #[test]
    fn test_render_selector_class() {
        let group = StyleGroup::new("Color", "color");
        assert_eq!(
            group.render_selector("dark", "a:1;", SelectorMode::Class),
            "*.data-theme-color-dark {\na:1;\n}"
        );
    }

    #[test]
    fn test_render_selector_default_falls_back_to_media() {
        let css = color().render_selector("default", "", SelectorMode::Attr);
        assert_eq!(
            css,
            "@media (prefers-color-scheme: light) {\n\
             *[ data-theme-color = 'default' ] {\n\
             bg: white;\n\
             }\n\
             }\n\
             \n\
             @media (prefers-color-scheme: dark) {\n\
             *[ data-theme-color = 'default' ] {\n\
             bg: black;\n\
             }\n\
             }"
        );
    }

    #[test]
    fn test_render_selector_default_class_fallback() {
        let css = color().render_selector("default", "", SelectorMode::Class);
        assert!(css.starts_with(
            "@media (prefers-color-scheme: light) {\n*.data-theme-color-default {\nbg: white;"
        ));
        assert_eq!(css.matches("@media").count(), 2);
    }

    #[test]
    fn test_render_selector_default_with_own_block() {
        let css = color().render_selector("default", "bg: gray;", SelectorMode::Attr);
        assert_eq!(css, "*[ data-theme-color = 'default' ] {\nbg: gray;\n}");
    }

    #[test]
    fn test_render_selector_only_default() {
        let mut group = StyleGroup::new("Color", "color");
        group.insert(StyleKind::new("Default", "default"));
        assert_eq!(group.render_selector("default", "", SelectorMode::Attr), "");
    }

    #[test]
    fn test_render_selector_empty_non_default_keeps_rule() {
        let group = StyleGroup::new("Color", "color");
        assert_eq!(
            group.render_selector("light", "", SelectorMode::Attr),
            "*[ data-theme-color = 'light' ] {\n\n}"
        );
    }

    #[test]
    fn test_render_all() {
        let css = color().render_all(SelectorMode::Class);
        assert_eq!(css.matches("@media").count(), 2);
        assert!(css.ends_with("*.data-theme-color-light {\nbg: white;\n}\n\n*.data-theme-color-dark {\nbg: black;\n}"));
    }

    #[test]
    fn test_create_replaces_type_in_place() {
        let mut group = color();
        group.create("Light", "light", &[Variable::new("Text", "fg", "black")]);
        let codes: Vec<_> = group.iter().map(StyleKind::code).collect();
        assert_eq!(codes, vec!["default", "light", "dark"]);
        assert!(group.get("light").unwrap().get("bg").is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut group = color();
        group.delete("light");
        group.delete("light");
        assert_eq!(group.len(), 2);
        assert!(group.get("light").is_none());
    }

    #[test]
    fn test_resolve_variables_explicit_type() {
        let vars = color().resolve_variables("dark", Some(ColorMode::Light)).unwrap();
        assert_eq!(vars, vec![Variable::new("Background", "bg", "black")]);
    }

    #[test]
    fn test_resolve_variables_default_follows_mode() {
        let group = color();
        let light = group.resolve_variables("default", Some(ColorMode::Light)).unwrap();
        assert_eq!(light[0].value, "white");
        let dark = group.resolve_variables("default", Some(ColorMode::Dark)).unwrap();
        assert_eq!(dark[0].value, "black");
        assert!(group.resolve_variables("default", None).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_variables_unknown_type() {
        assert!(color().resolve_variables("sepia", None).is_err());
    }
}
