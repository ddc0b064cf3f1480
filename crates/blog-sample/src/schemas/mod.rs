//! # Blog Schemas
//!
//! One [`Schema`](jsonapi_encoder::Schema) per model type. Include depths are
//! chosen so that encoding a [`Site`](crate::model::Site) reaches the authors
//! of comments but stops before the category tree gets deep.

mod authors;
mod categories;
mod posts;
mod sites;

pub use authors::AuthorSchema;
pub use categories::CategorySchema;
pub use posts::{CommentSchema, PostSchema};
pub use sites::SiteSchema;

use jsonapi_encoder::{Attributes, SchemaRegistry};
use serde::Serialize;
use serde_json::Value;

/// Registry with every blog schema.
pub fn registry() -> SchemaRegistry {
    SchemaRegistry::new()
        .with(SiteSchema)
        .with(PostSchema)
        .with(CommentSchema)
        .with(AuthorSchema)
        .with(CategorySchema)
}

/// Attributes of a model that serializes to a JSON object.
fn serialized_attributes<T: Serialize>(model: &T) -> Attributes {
    match serde_json::to_value(model) {
        Ok(Value::Object(attributes)) => attributes,
        Ok(other) => {
            tracing::warn!(kind = ?other, "Model did not serialize to an object");
            Attributes::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model serialization failed");
            Attributes::new()
        }
    }
}
