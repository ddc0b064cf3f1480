//! Schema resolution: how domain objects map to resource type, id,
//! attributes, URLs, meta and relationships.
//!
//! # Main Components
//!
//! - [`Schema`] - Implemented once per resource type
//! - [`SchemaProvider`] - Object-safe form used by the encoder
//! - [`SchemaRegistry`] - Runtime-type keyed container of schemas

pub mod provider;
pub mod registry;

pub use provider::*;
pub use registry::*;
