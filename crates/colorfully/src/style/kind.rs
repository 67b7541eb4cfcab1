//! A style type: one variant of a group, holding its variables.

use indexmap::IndexMap;

use super::variable::Variable;
use crate::error::{Result, ThemeError};

/// A named collection of [`Variable`]s, keyed by variable code.
///
/// This is one concrete variant within a [`StyleGroup`](super::StyleGroup),
/// e.g. the `dark` type of the `color` group. Variables keep their
/// insertion order, which is also the order they are rendered in.
///
/// # Example
///
/// ```rust
/// use colorfully::StyleKind;
///
/// let mut dark = StyleKind::new("Dark", "dark");
/// dark.create("Background", "--bg", "#000");
/// dark.create("Text", "--fg", "#eee");
/// dark.change("--bg", "#111").unwrap();
///
/// assert_eq!(dark.get("--bg").unwrap().value, "#111");
/// assert_eq!(dark.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleKind {
    name: String,
    code: String,
    variables: IndexMap<String, Variable>,
}

impl StyleKind {
    /// Creates an empty type.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            variables: IndexMap::new(),
        }
    }

    /// Creates a type holding copies of `variables`, keyed by their codes.
    ///
    /// A later variable with a repeated code overwrites the earlier one.
    pub fn with_variables<'a, I>(name: impl Into<String>, code: impl Into<String>, variables: I) -> Self
    where
        I: IntoIterator<Item = &'a Variable>,
    {
        let mut kind = Self::new(name, code);
        for var in variables {
            kind.variables.insert(var.code.clone(), var.clone());
        }
        kind
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the type. The code is its identity and never changes.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the type code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns every variable in insertion order.
    pub fn get_all(&self) -> Vec<&Variable> {
        self.variables.values().collect()
    }

    /// Iterates over the variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Returns the variable with the given code.
    pub fn get(&self, code: &str) -> Option<&Variable> {
        self.variables.get(code)
    }

    /// Returns a mutable reference to the variable with the given code.
    pub fn get_mut(&mut self, code: &str) -> Option<&mut Variable> {
        self.variables.get_mut(code)
    }

    /// Inserts a variable, overwriting any existing one with the same code.
    ///
    /// An overwritten variable keeps its position.
    pub fn create(&mut self, name: impl Into<String>, code: impl Into<String>, value: impl Into<String>) {
        let var = Variable::new(name, code, value);
        self.variables.insert(var.code.clone(), var);
    }

    /// Removes a variable. Removing an unknown code does nothing.
    pub fn delete(&mut self, code: &str) {
        self.variables.shift_remove(code);
    }

    /// Changes the value of an existing variable.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::VariableNotFound`] if no variable has this code.
    pub fn change(&mut self, code: &str, value: impl Into<String>) -> Result<()> {
        let var = self
            .variables
            .get_mut(code)
            .ok_or_else(|| ThemeError::VariableNotFound {
                kind: self.code.clone(),
                code: code.to_string(),
            })?;
        var.value = value.into();
        Ok(())
    }

    /// Formats the variables as newline-separated declarations.
    ///
    /// The block has no selector and no trailing newline; an empty type
    /// yields an empty string.
    pub fn declarations(&self) -> String {
        self.variables
            .values()
            .map(Variable::declaration)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns true if the type has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }
}
