//! The style data model: variables, types and groups.
//!
//! ```text
//! StyleRegistry
//! └── StyleGroup "color"
//!     ├── StyleKind "default"   (no variables: follows the OS preference)
//!     ├── StyleKind "light"     --bg: #fff;
//!     └── StyleKind "dark"      --bg: #000;
//! ```
//!
//! Every level is an insertion-ordered map keyed by code. Creating an entry
//! whose code already exists replaces it in place; deleting a missing code
//! is a no-op.

mod group;
mod kind;
mod registry;
mod variable;

pub use group::StyleGroup;
pub use kind::StyleKind;
pub use registry::StyleRegistry;
pub use variable::Variable;
