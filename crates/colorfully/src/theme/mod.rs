//! The theme facade and color-scheme detection.
//!
//! [`Theme`] ties a [`StyleRegistry`](crate::StyleRegistry) and a
//! [`SchemaRegistry`](crate::SchemaRegistry) together and switches the
//! active schema on a [`MountTarget`](crate::MountTarget).
//!
//! ## Activation
//!
//! Activating a schema always moves the root element's markers first, then
//! deals with stylesheets according to the [`RenderMode`](crate::RenderMode):
//!
//! | Mode  | First activation               | Later activations            |
//! |-------|--------------------------------|------------------------------|
//! | `css` | mount every group and type     | markers only                 |
//! | `js`  | mount the schema's types       | re-render and re-mount       |
//!
//! Mounting replaces all previously mounted theme styles, so it is
//! idempotent.
//!
//! ## Color Mode Detection
//!
//! Browsers resolve a `default` type through `prefers-color-scheme` media
//! queries. Other consumers use [`Theme::resolve_variables`] with a mode from
//! [`detect_color_mode`], which can be overridden for tests:
//!
//! ```rust
//! use colorfully::{set_theme_detector, ColorMode};
//!
//! set_theme_detector(|| ColorMode::Dark);
//! ```

mod adaptive;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode};
pub use theme::{Theme, ThemeOptions, ThemeParams};
