//! Schemas: named selections of one type per style group.
//!
//! A schema is a complete theme choice such as "night reading" =
//! `{ color: dark, spacing: cozy }`. Schemas refer to groups and types by
//! code only; nothing checks those codes when a schema is created. A
//! reference to a missing group or type surfaces when the schema is
//! activated, or earlier through [`SchemaRegistry::validate`].

#[allow(clippy::module_inception)]
mod schema;
mod registry;

pub use registry::SchemaRegistry;
pub use schema::Schema;
