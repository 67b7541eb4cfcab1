//! Render targets: where markers and stylesheets end up.
//!
//! The facade never touches a concrete document. Activation talks to a
//! [`MountTarget`], which exposes only what theme switching needs:
//!
//! - clear every theme marker from the root element
//! - set one marker
//! - list, insert and remove the theme's style elements
//!
//! [`MemoryDocument`] is an in-memory implementation, useful for
//! server-side rendering and tests. A browser binding implements the same
//! trait over the real DOM.
//!
//! Either step of activation can also be replaced wholesale with a
//! [`CustomMount`] callback, e.g. to hand the rendered sheets to a build
//! tool instead of a document.

mod memory;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::render::{Marker, SelectorMode, StyleSheet};

pub use memory::{HeadNode, MemoryDocument, THEME_STYLE_ATTRIBUTE};

/// Opaque identifier of a style element inserted by a [`MountTarget`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleHandle(pub u64);

/// The document operations theme activation relies on.
pub trait MountTarget {
    /// Removes every theme marker of the given mode from the root element.
    ///
    /// In [`SelectorMode::Attr`] this removes all `data-theme-*` attributes,
    /// in [`SelectorMode::Class`] all `data-theme-*` class tokens.
    fn clear_markers(&mut self, mode: SelectorMode);

    /// Writes one marker on the root element.
    fn set_marker(&mut self, marker: &Marker);

    /// Returns the style elements previously inserted for the theme.
    fn mounted_styles(&self) -> Vec<StyleHandle>;

    /// Inserts one style element per sheet, tagged as theme styles.
    ///
    /// The new elements keep the order of `sheets` and go ahead of the
    /// first style element the document had before the call.
    fn insert_styles(&mut self, sheets: &[StyleSheet]) -> Vec<StyleHandle>;

    /// Removes a theme style element. Unknown handles are ignored.
    fn remove_style(&mut self, handle: StyleHandle);
}

/// A mount target shared between a theme and the code that owns the document.
pub type SharedTarget = Rc<RefCell<dyn MountTarget>>;

/// Wraps a target so it can be handed to a [`Theme`](crate::Theme) while
/// the caller keeps access to it.
pub fn shared<T: MountTarget + 'static>(target: T) -> (Rc<RefCell<T>>, SharedTarget) {
    let concrete = Rc::new(RefCell::new(target));
    let erased: SharedTarget = concrete.clone();
    (concrete, erased)
}

/// Callback replacing marker application. Receives the schema's group → type map.
pub type SelectorCallback = Rc<dyn Fn(&IndexMap<String, String>)>;

/// Callback replacing stylesheet mounting. Receives the rendered sheets.
pub type StyleCallback = Rc<dyn Fn(&[StyleSheet])>;

/// Optional overrides for the two activation steps.
#[derive(Clone, Default)]
pub struct CustomMount {
    /// Replaces writing markers on the root element.
    pub selector: Option<SelectorCallback>,
    /// Replaces inserting style elements.
    pub style: Option<StyleCallback>,
}

impl CustomMount {
    /// Creates a mount with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selector callback.
    pub fn selector(mut self, callback: impl Fn(&IndexMap<String, String>) + 'static) -> Self {
        self.selector = Some(Rc::new(callback));
        self
    }

    /// Sets the style callback.
    pub fn style(mut self, callback: impl Fn(&[StyleSheet]) + 'static) -> Self {
        self.style = Some(Rc::new(callback));
        self
    }
}

impl fmt::Debug for CustomMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomMount")
            .field("selector", &self.selector.is_some())
            .field("style", &self.style.is_some())
            .finish()
    }
}
