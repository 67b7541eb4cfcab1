//! The theme facade.
//!
//! A [`Theme`] owns the style and schema registries, knows how to move
//! between them and a [`ThemeConfig`] document, and activates schemas on its
//! mount target.
//!
//! # Construction
//!
//! ```rust
//! use colorfully::{RenderMode, SelectorMode, Theme, ThemeConfig, ThemeParams};
//!
//! let config = ThemeConfig::from_yaml(r##"
//! styles:
//!   - name: Color
//!     code: color
//!     types:
//!       - { name: Light, code: light, variables: [{ name: Background, code: --bg, value: "#fff" }] }
//!       - { name: Dark, code: dark, variables: [{ name: Background, code: --bg, value: "#000" }] }
//! schemas:
//!   - { name: Day, code: day, map: { color: light } }
//!   - { name: Night, code: night, map: { color: dark } }
//! "##).unwrap();
//!
//! let mut theme = Theme::with_params(
//!     ThemeParams::new()
//!         .mode(RenderMode::Css)
//!         .selector_mode(SelectorMode::Class),
//! );
//! theme.import(&config);
//! theme.activate("night").unwrap();
//! assert!(theme.is_initialized());
//! ```
//!
//! # Deriving
//!
//! [`Theme::derive`] copies the whole configuration into a new, independent
//! facade, optionally with a different root or modes. The copy starts
//! uninitialized, so its first activation mounts its own stylesheets.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::adaptive::ColorMode;
use crate::config::{SchemaConfig, StyleConfig, ThemeConfig};
use crate::error::{Result, ThemeError};
use crate::mount::{CustomMount, MemoryDocument, SharedTarget};
use crate::render::{RenderMode, SelectorMode, StyleSheet};
use crate::schema::{Schema, SchemaRegistry};
use crate::style::{StyleGroup, StyleKind, StyleRegistry, Variable};

/// Render and selector modes of a [`Theme`].
///
/// Deserializes from `{ "mode": "css" | "js", "selectorMode": "attr" | "class" }`,
/// with either key optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOptions {
    /// When stylesheets are generated.
    pub mode: RenderMode,
    /// How the active schema is marked on the root element.
    pub selector_mode: SelectorMode,
}

/// Construction parameters for a [`Theme`].
///
/// Unset fields take the defaults: `css` mode, `attr` selectors, a fresh
/// [`MemoryDocument`] root and no custom mount. When passed to
/// [`Theme::derive`], unset fields inherit from the source theme instead.
#[derive(Clone, Default)]
pub struct ThemeParams {
    pub mode: Option<RenderMode>,
    pub selector_mode: Option<SelectorMode>,
    pub root: Option<SharedTarget>,
    pub custom_mount: Option<CustomMount>,
}

impl ThemeParams {
    /// Creates parameters with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render mode.
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the selector mode.
    pub fn selector_mode(mut self, selector_mode: SelectorMode) -> Self {
        self.selector_mode = Some(selector_mode);
        self
    }

    /// Sets both modes from a deserialized options record.
    pub fn options(self, options: ThemeOptions) -> Self {
        self.mode(options.mode).selector_mode(options.selector_mode)
    }

    /// Sets the mount target.
    pub fn root(mut self, root: SharedTarget) -> Self {
        self.root = Some(root);
        self
    }

    /// Sets the custom mount callbacks.
    pub fn custom_mount(mut self, custom_mount: CustomMount) -> Self {
        self.custom_mount = Some(custom_mount);
        self
    }
}

impl fmt::Debug for ThemeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeParams")
            .field("mode", &self.mode)
            .field("selector_mode", &self.selector_mode)
            .field("root", &self.root.is_some())
            .field("custom_mount", &self.custom_mount)
            .finish()
    }
}

/// Style and schema registries plus the activation machinery.
///
/// A theme starts uninitialized and becomes initialized on its first
/// successful [`activate`](Theme::activate); it never goes back.
pub struct Theme {
    styles: StyleRegistry,
    schemas: SchemaRegistry,
    options: ThemeOptions,
    root: SharedTarget,
    custom_mount: CustomMount,
    initialized: bool,
}

impl Theme {
    /// Creates an empty theme with default parameters.
    pub fn new() -> Self {
        Self::with_params(ThemeParams::default())
    }

    /// Creates an empty theme.
    pub fn with_params(params: ThemeParams) -> Self {
        let options = ThemeOptions {
            mode: params.mode.unwrap_or_default(),
            selector_mode: params.selector_mode.unwrap_or_default(),
        };
        Self {
            styles: StyleRegistry::new(),
            schemas: SchemaRegistry::new(),
            options,
            root: params.root.unwrap_or_else(default_root),
            custom_mount: params.custom_mount.unwrap_or_default(),
            initialized: false,
        }
    }

    /// Creates a theme with default parameters holding `config`.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::new();
        theme.import(config);
        theme
    }

    /// Returns the style registry.
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Returns the style registry for editing.
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    /// Returns the schema registry.
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Returns the schema registry for editing.
    pub fn schemas_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.schemas
    }

    /// Returns the render and selector modes.
    pub fn options(&self) -> ThemeOptions {
        self.options
    }

    /// Returns a handle to the mount target.
    pub fn root(&self) -> SharedTarget {
        Rc::clone(&self.root)
    }

    /// Returns true once a schema has been activated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Makes a schema the active theme.
    ///
    /// Markers on the root element are replaced by the schema's selections,
    /// then stylesheets are mounted: in `css` mode only on the first
    /// activation (the full render covers every schema), in `js` mode every
    /// time, rendering only the schema's types.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::SchemaNotFound`] for an unknown schema, and
    /// [`ThemeError::GroupNotFound`] / [`ThemeError::TypeNotFound`] when the
    /// schema selects something the style registry doesn't have. Nothing is
    /// written to the target on error.
    pub fn activate(&mut self, schema_code: &str) -> Result<()> {
        let schema = self
            .schemas
            .get(schema_code)
            .ok_or_else(|| ThemeError::SchemaNotFound(schema_code.to_string()))?;
        let ThemeOptions {
            mode,
            selector_mode,
        } = self.options;

        let sheets = match mode {
            RenderMode::Css => {
                for (group, kind) in schema.iter() {
                    self.styles.kind(group, kind)?;
                }
                if self.initialized {
                    None
                } else {
                    Some(self.styles.to_style_list(selector_mode))
                }
            }
            RenderMode::Js => Some(self.styles.to_style_list_by_schema(schema, selector_mode)?),
        };

        debug!(
            schema = schema_code,
            ?mode,
            ?selector_mode,
            render = sheets.is_some(),
            "activating theme schema"
        );

        self.apply_selector(schema);
        if let Some(sheets) = sheets {
            self.mount_styles(&sheets);
        }
        self.initialized = true;
        Ok(())
    }

    fn apply_selector(&self, schema: &Schema) {
        if let Some(callback) = &self.custom_mount.selector {
            callback(schema.map());
            return;
        }

        let mode = self.options.selector_mode;
        let mut root = self.root.borrow_mut();
        root.clear_markers(mode);
        for (group, kind) in schema.iter() {
            root.set_marker(&mode.marker(group, kind));
        }
    }

    fn mount_styles(&self, sheets: &[StyleSheet]) {
        if let Some(callback) = &self.custom_mount.style {
            callback(sheets);
            return;
        }

        let mut root = self.root.borrow_mut();
        let stale = root.mounted_styles();
        let inserted = root.insert_styles(sheets);
        trace!(inserted = inserted.len(), removed = stale.len(), "mounted theme styles");
        for handle in stale {
            root.remove_style(handle);
        }
    }

    /// Merges a configuration document into the registries.
    ///
    /// Existing groups keep their position and are renamed; their existing
    /// types get variables created or overwritten by code, and new types are
    /// appended. Schemas replace schemas with the same code. All values are
    /// copied.
    pub fn import(&mut self, config: &ThemeConfig) {
        for style in &config.styles {
            match self.styles.get_mut(&style.code) {
                Some(group) => merge_group(group, style),
                None => {
                    let mut group = StyleGroup::new(style.name.as_str(), style.code.as_str());
                    for kind in &style.types {
                        group.insert(StyleKind::from(kind));
                    }
                    self.styles.insert(group);
                }
            }
        }

        for schema in &config.schemas {
            self.schemas.insert(Schema::from(schema));
        }

        debug!(
            styles = config.styles.len(),
            schemas = config.schemas.len(),
            "imported theme config"
        );
    }

    /// Returns the registries as a configuration document, in registry order.
    pub fn export(&self) -> ThemeConfig {
        ThemeConfig {
            styles: self.styles.iter().map(StyleConfig::from).collect(),
            schemas: self.schemas.iter().map(SchemaConfig::from).collect(),
        }
    }

    /// Creates an independent copy of this theme.
    ///
    /// The copy holds the exported configuration of this theme. Parameters
    /// set in `params` override this theme's; unset ones are inherited. The
    /// copy starts uninitialized.
    pub fn derive(&self, params: ThemeParams) -> Theme {
        let inherited = ThemeParams {
            mode: Some(params.mode.unwrap_or(self.options.mode)),
            selector_mode: Some(params.selector_mode.unwrap_or(self.options.selector_mode)),
            root: Some(params.root.unwrap_or_else(|| self.root())),
            custom_mount: Some(params.custom_mount.unwrap_or_else(|| self.custom_mount.clone())),
        };
        debug!(?inherited, "deriving theme");

        let mut derived = Theme::with_params(inherited);
        derived.import(&self.export());
        derived
    }

    /// Checks every schema against the style registry.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DanglingReference`] for the first selection
    /// that points at a missing group or type.
    pub fn validate(&self) -> Result<()> {
        self.schemas.validate(&self.styles)
    }

    /// Returns the variables in effect for each group of a schema.
    ///
    /// `default` types without variables follow `mode`; see
    /// [`StyleGroup::resolve_variables`]. Pass
    /// `Some(detect_color_mode())` to follow the OS preference.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::SchemaNotFound`], [`ThemeError::GroupNotFound`]
    /// or [`ThemeError::TypeNotFound`].
    pub fn resolve_variables(
        &self,
        schema_code: &str,
        mode: Option<ColorMode>,
    ) -> Result<IndexMap<String, Vec<Variable>>> {
        let schema = self
            .schemas
            .get(schema_code)
            .ok_or_else(|| ThemeError::SchemaNotFound(schema_code.to_string()))?;

        let mut resolved = IndexMap::new();
        for (group_code, kind) in schema.iter() {
            let group = self
                .styles
                .get(group_code)
                .ok_or_else(|| ThemeError::GroupNotFound(group_code.clone()))?;
            resolved.insert(group_code.clone(), group.resolve_variables(kind, mode)?);
        }
        Ok(resolved)
    }
}

fn default_root() -> SharedTarget {
    Rc::new(RefCell::new(MemoryDocument::new()))
}

fn merge_group(group: &mut StyleGroup, config: &StyleConfig) {
    group.set_name(config.name.as_str());
    for kind_config in &config.types {
        match group.get_mut(&kind_config.code) {
            Some(kind) => {
                kind.set_name(kind_config.name.as_str());
                for var in &kind_config.variables {
                    kind.create(var.name.as_str(), var.code.as_str(), var.value.as_str());
                }
            }
            None => group.insert(StyleKind::from(kind_config)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("styles", &self.styles)
            .field("schemas", &self.schemas)
            .field("options", &self.options)
            .field("custom_mount", &self.custom_mount)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
