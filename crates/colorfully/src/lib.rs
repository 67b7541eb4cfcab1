//! # Colorfully - Runtime-Switchable CSS Variable Themes
//!
//! `colorfully` stores CSS variable values organized into style groups and
//! types, composes them into CSS text, and switches the active theme by
//! moving a marker attribute or class on the document root.
//!
//! ## Core Concepts
//!
//! - [`Variable`]: one value, rendered as `<code>: <value>;`
//! - [`StyleKind`]: one variant of a group (`dark` in `color`), holding variables
//! - [`StyleGroup`]: a themeable category holding its types
//! - [`Schema`]: a complete theme, selecting one type per group
//! - [`Theme`]: the facade that imports/exports configs and activates schemas
//! - [`MountTarget`]: the document abstraction activation writes to
//!
//! ## Quick Start
//!
//! ```rust
//! use colorfully::{shared, MemoryDocument, Theme, ThemeConfig, ThemeParams};
//!
//! let config = ThemeConfig::from_yaml(r##"
//! styles:
//!   - name: Color
//!     code: color
//!     types:
//!       - { name: Default, code: default }
//!       - { name: Light, code: light, variables: [{ name: Background, code: --bg, value: "#fff" }] }
//!       - { name: Dark, code: dark, variables: [{ name: Background, code: --bg, value: "#000" }] }
//! schemas:
//!   - { name: Auto, code: auto, map: { color: default } }
//!   - { name: Night, code: night, map: { color: dark } }
//! "##).unwrap();
//!
//! let (doc, root) = shared(MemoryDocument::new());
//! let mut theme = Theme::with_params(ThemeParams::new().root(root));
//! theme.import(&config);
//!
//! theme.activate("night").unwrap();
//! assert_eq!(doc.borrow().attribute("data-theme-color"), Some("dark"));
//!
//! let css = doc.borrow().theme_css("color").unwrap().to_string();
//! assert!(css.contains("*[ data-theme-color = 'dark' ] {\n--bg: #000;\n}"));
//! assert!(css.contains("@media (prefers-color-scheme: dark)"));
//! ```
//!
//! ## Selector Modes
//!
//! [`SelectorMode::Attr`] marks the root with `data-theme-<group>="<type>"`
//! and renders `*[ data-theme-<group> = '<type>' ]` rules.
//! [`SelectorMode::Class`] uses `data-theme-<group>-<type>` class tokens and
//! `*.data-theme-<group>-<type>` rules.
//!
//! ## Render Modes
//!
//! In [`RenderMode::Css`] the first activation mounts the CSS for every
//! group and type; later activations only move markers. In
//! [`RenderMode::Js`] every activation renders just the selected types and
//! hands over their variables as well, which suits build-time consumers
//! plugged in through [`CustomMount`].

pub mod config;
mod error;
pub mod mount;
pub mod render;
pub mod schema;
pub mod style;
pub mod theme;

// Error type
pub use error::{Result, ThemeError};

// Data model
pub use schema::{Schema, SchemaRegistry};
pub use style::{StyleGroup, StyleKind, StyleRegistry, Variable};

// Rendering
pub use render::{Marker, RenderMode, SelectorMode, StyleSheet, DEFAULT_KIND, MARKER_PREFIX};

// Configuration
pub use config::{KindConfig, SchemaConfig, StyleConfig, ThemeConfig, CONFIG_EXTENSIONS};

// Mounting
pub use mount::{
    shared, CustomMount, HeadNode, MemoryDocument, MountTarget, SelectorCallback, SharedTarget,
    StyleCallback, StyleHandle, THEME_STYLE_ATTRIBUTE,
};

// Facade
pub use theme::{detect_color_mode, set_theme_detector, ColorMode, Theme, ThemeOptions, ThemeParams};
