//! # JSON:API Encoder
//!
//! > **Turn an object graph into a JSON:API document, driven by schemas.**
//!
//! Domain objects stay plain Rust structs. Each resource type gets a
//! [`Schema`] describing its type name, id, attributes, URLs, meta and
//! relationships; the [`Encoder`] walks the graph and produces `data`,
//! `included`, and document-level `links`/`meta`.
//!
//! ## 🚀 Core Concepts
//!
//! ### Schemas, not annotations
//! The objects never learn about the output format. A [`SchemaRegistry`] maps
//! the runtime type of each object to its schema, so any `'static` value can
//! be encoded, including objects reached only through relationships.
//!
//! ### Bounded traversal
//! Relationships marked for inclusion are followed depth first. The length of
//! the relationship path (`author.publisher.country` is 3) is compared with
//! the owning schema's `max_include_depth`; past that, the relationship is
//! dropped. Cyclic graphs therefore terminate without identity tracking.
//!
//! ### Incremental assembly
//! Resource objects and relationship records are pushed into a
//! [`DocumentSink`] as they are discovered. [`Document`] is the default sink.
//!
//! ## 🗺️ Module Tour
//!
//! - [`encoder`] - The engine: top-level dispatch and relationship traversal
//! - [`schema`] - [`Schema`], its object-safe [`SchemaProvider`] form, and the registry
//! - [`link`] - Relationship descriptors and emitted records
//! - [`document`] - The accumulator contract and the default document
//! - [`render`] - JSON rendering and [`RenderOptions`]
//! - [`runtime`] - Tracing setup for applications
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use jsonapi_encoder::{Attributes, Data, Encoder, LinkDescriptor, LinkedData, Schema, SchemaRegistry};
//! use serde_json::json;
//!
//! struct Person { id: u32, name: String }
//! struct Article { id: u32, title: String, author: Person }
//!
//! struct PersonSchema;
//! impl Schema for PersonSchema {
//!     type Resource = Person;
//!     fn resource_type(&self) -> &str { "people" }
//!     fn id(&self, person: &Person) -> String { person.id.to_string() }
//!     fn attributes(&self, person: &Person) -> Attributes {
//!         let mut attributes = Attributes::new();
//!         attributes.insert("name".into(), json!(person.name));
//!         attributes
//!     }
//! }
//!
//! struct ArticleSchema;
//! impl Schema for ArticleSchema {
//!     type Resource = Article;
//!     fn resource_type(&self) -> &str { "articles" }
//!     fn id(&self, article: &Article) -> String { article.id.to_string() }
//!     fn relationships<'a>(&self, article: &'a Article) -> Vec<LinkDescriptor<'a>> {
//!         vec![LinkDescriptor::new("author", LinkedData::single(&article.author)).include()]
//!     }
//! }
//!
//! let encoder = Encoder::new(SchemaRegistry::new().with(ArticleSchema).with(PersonSchema));
//! let article = Article { id: 1, title: "Rails is Omakase".into(), author: Person { id: 9, name: "Dan".into() } };
//!
//! let document = encoder.encode_value(Data::single(&article), None, None).unwrap();
//! assert_eq!(document["data"]["relationships"]["author"]["data"], json!({ "type": "people", "id": "9" }));
//! assert_eq!(document["included"][0]["attributes"]["name"], json!("Dan"));
//! ```

pub mod document;
pub mod encoder;
pub mod error;
pub mod link;
pub mod render;
pub mod resource;
pub mod runtime;
pub mod schema;

// Re-export core types for convenience
pub use document::{Document, DocumentLinks, DocumentSink, ElementHandle, ResourceObject};
pub use encoder::Encoder;
pub use error::EncodeError;
pub use link::{LinkDescriptor, LinkRecord, LinkageIds, LinkedData};
pub use render::RenderOptions;
pub use resource::{Data, Resource};
pub use schema::{Attributes, Schema, SchemaProvider, SchemaRegistry};
