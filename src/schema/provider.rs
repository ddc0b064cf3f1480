//! # Schema Traits
//!
//! [`Schema`] is what applications implement: one impl per resource type, with
//! an associated `Resource` type so the methods receive the concrete struct.
//!
//! The encoder cannot call a generic trait on an object whose type is only
//! known at runtime, so every `Schema` is also a [`SchemaProvider`] through a
//! blanket impl. `SchemaProvider` takes `&dyn Resource` and downcasts.

use crate::error::EncodeError;
use crate::link::LinkDescriptor;
use crate::resource::Resource;
use serde_json::{Map, Value};
use std::any::Any;

/// Ordered attribute map of a resource.
pub type Attributes = Map<String, Value>;

/// Include depth used when a schema does not override it.
pub const DEFAULT_INCLUDE_DEPTH: usize = 1;

/// Describes how one resource type is encoded.
///
/// Only [`resource_type`](Schema::resource_type) and [`id`](Schema::id) are
/// required; everything else has a default.
///
/// ```rust
/// use jsonapi_encoder::link::{LinkDescriptor, LinkedData};
/// use jsonapi_encoder::schema::{Attributes, Schema};
/// use serde_json::json;
///
/// struct Person { id: u32, name: String }
/// struct Post { id: u32, title: String, author: Person }
///
/// struct PostSchema;
///
/// impl Schema for PostSchema {
///     type Resource = Post;
///
///     fn resource_type(&self) -> &str { "posts" }
///
///     fn id(&self, post: &Post) -> String { post.id.to_string() }
///
///     fn attributes(&self, post: &Post) -> Attributes {
///         let mut attributes = Attributes::new();
///         attributes.insert("title".into(), json!(post.title));
///         attributes
///     }
///
///     fn relationships<'a>(&self, post: &'a Post) -> Vec<LinkDescriptor<'a>> {
///         vec![LinkDescriptor::new("author", LinkedData::single(&post.author)).include()]
///     }
/// }
/// ```
pub trait Schema: Send + Sync + 'static {
    /// The domain type this schema describes.
    type Resource: Any;

    fn resource_type(&self) -> &str;

    fn id(&self, resource: &Self::Resource) -> String;

    fn attributes(&self, _resource: &Self::Resource) -> Attributes {
        Attributes::new()
    }

    /// URL prefix of this resource type.
    fn self_sub_url(&self) -> String {
        format!("/{}", self.resource_type())
    }

    fn self_url(&self, resource: &Self::Resource) -> String {
        format!("{}/{}", self.self_sub_url(), self.id(resource))
    }

    fn meta(&self, _resource: &Self::Resource) -> Option<Value> {
        None
    }

    /// Meta attached to a relationship whose linked objects this schema
    /// describes (`show_meta` on the descriptor).
    fn relationship_meta(&self, linked: &[&Self::Resource]) -> Option<Value> {
        match linked {
            [resource] => self.meta(resource),
            _ => None,
        }
    }

    /// Relationships in the order they are encoded.
    fn relationships<'a>(&self, _resource: &'a Self::Resource) -> Vec<LinkDescriptor<'a>> {
        Vec::new()
    }

    /// Maximum relationship-path length traversed from resources of this type.
    fn max_include_depth(&self) -> usize {
        DEFAULT_INCLUDE_DEPTH
    }

    /// Whether resources included through this type's relationships show their self URL.
    fn show_self_in_included(&self) -> bool {
        false
    }

    /// Whether resources included through this type's relationships show their meta.
    fn show_meta_in_included(&self) -> bool {
        false
    }
}

/// Object-safe view of a [`Schema`], used by the encoder.
pub trait SchemaProvider: Send + Sync {
    fn resource_type(&self) -> &str;
    fn id(&self, resource: &dyn Resource) -> Result<String, EncodeError>;
    fn attributes(&self, resource: &dyn Resource) -> Result<Attributes, EncodeError>;
    fn self_url(&self, resource: &dyn Resource) -> Result<String, EncodeError>;
    fn meta(&self, resource: &dyn Resource) -> Result<Option<Value>, EncodeError>;
    fn relationship_meta(&self, linked: &[&dyn Resource]) -> Result<Option<Value>, EncodeError>;
    fn link_descriptors<'a>(
        &self,
        resource: &'a dyn Resource,
    ) -> Result<Vec<LinkDescriptor<'a>>, EncodeError>;
    fn max_include_depth(&self) -> usize;
    fn show_self_in_included(&self) -> bool;
    fn show_meta_in_included(&self) -> bool;
}

impl<S: Schema> SchemaProvider for S {
    fn resource_type(&self) -> &str {
        Schema::resource_type(self)
    }

    fn id(&self, resource: &dyn Resource) -> Result<String, EncodeError> {
        Ok(Schema::id(self, self.downcast(resource)?))
    }

    fn attributes(&self, resource: &dyn Resource) -> Result<Attributes, EncodeError> {
        Ok(Schema::attributes(self, self.downcast(resource)?))
    }

    fn self_url(&self, resource: &dyn Resource) -> Result<String, EncodeError> {
        Ok(Schema::self_url(self, self.downcast(resource)?))
    }

    fn meta(&self, resource: &dyn Resource) -> Result<Option<Value>, EncodeError> {
        Ok(Schema::meta(self, self.downcast(resource)?))
    }

    fn relationship_meta(&self, linked: &[&dyn Resource]) -> Result<Option<Value>, EncodeError> {
        let linked = linked
            .iter()
            .map(|resource| self.downcast(*resource))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schema::relationship_meta(self, &linked))
    }

    fn link_descriptors<'a>(
        &self,
        resource: &'a dyn Resource,
    ) -> Result<Vec<LinkDescriptor<'a>>, EncodeError> {
        Ok(Schema::relationships(self, self.downcast(resource)?))
    }

    fn max_include_depth(&self) -> usize {
        Schema::max_include_depth(self)
    }

    fn show_self_in_included(&self) -> bool {
        Schema::show_self_in_included(self)
    }

    fn show_meta_in_included(&self) -> bool {
        Schema::show_meta_in_included(self)
    }
}

trait Downcast: Schema {
    fn downcast<'r>(&self, resource: &'r dyn Resource) -> Result<&'r Self::Resource, EncodeError> {
        resource
            .as_any()
            .downcast_ref::<Self::Resource>()
            .ok_or_else(|| EncodeError::ResourceMismatch {
                resource_type: Schema::resource_type(self).to_string(),
                found: resource.type_name(),
            })
    }
}

impl<S: Schema> Downcast for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkedData;
    use serde_json::json;

    struct Book {
        isbn: &'static str,
        title: &'static str,
        sequel: Option<Box<Book>>,
    }

    struct BookSchema;

    impl Schema for BookSchema {
        type Resource = Book;

        fn resource_type(&self) -> &str {
            "books"
        }

        fn id(&self, book: &Book) -> String {
            book.isbn.to_string()
        }

        fn attributes(&self, book: &Book) -> Attributes {
            let mut attributes = Attributes::new();
            attributes.insert("title".into(), json!(book.title));
            attributes
        }

        fn meta(&self, book: &Book) -> Option<Value> {
            Some(json!({ "isbn_length": book.isbn.len() }))
        }

        fn relationships<'a>(&self, book: &'a Book) -> Vec<LinkDescriptor<'a>> {
            vec![LinkDescriptor::new("sequel", LinkedData::optional(book.sequel.as_deref()))]
        }
    }

    fn book() -> Book {
        Book {
            isbn: "978-0",
            title: "Dune",
            sequel: Some(Box::new(Book { isbn: "978-1", title: "Dune Messiah", sequel: None })),
        }
    }

    #[test]
    fn test_provider_defaults_through_blanket_impl() {
        let provider: &dyn SchemaProvider = &BookSchema;
        let book = book();

        assert_eq!(provider.resource_type(), "books");
        assert_eq!(provider.id(&book).unwrap(), "978-0");
        assert_eq!(provider.self_url(&book).unwrap(), "/books/978-0");
        assert_eq!(provider.attributes(&book).unwrap()["title"], json!("Dune"));
        assert_eq!(provider.max_include_depth(), DEFAULT_INCLUDE_DEPTH);
        assert!(!provider.show_self_in_included());
        assert!(!provider.show_meta_in_included());
    }

    #[test]
    fn test_link_descriptors_borrow_from_resource() {
        let provider: &dyn SchemaProvider = &BookSchema;
        let book = book();

        let links = provider.link_descriptors(&book).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "sequel");
        let sequel = links[0].data.as_slice()[0];
        assert_eq!(provider.id(sequel).unwrap(), "978-1");
    }

    #[test]
    fn test_relationship_meta_of_single_object() {
        let provider: &dyn SchemaProvider = &BookSchema;
        let book = book();

        let meta = provider.relationship_meta(&[&book]).unwrap();
        assert_eq!(meta, Some(json!({ "isbn_length": 5 })));

        let other = self::book();
        assert_eq!(provider.relationship_meta(&[&book, &other]).unwrap(), None);
    }

    #[test]
    fn test_wrong_resource_type_is_rejected() {
        let provider: &dyn SchemaProvider = &BookSchema;
        let err = provider.id(&"not a book").unwrap_err();
        assert!(matches!(err, EncodeError::ResourceMismatch { ref resource_type, .. } if resource_type == "books"));
    }
}
