//! # Document Accumulator
//!
//! The encoder does not build JSON itself. It pushes resource objects and
//! relationship records into a [`DocumentSink`] as it discovers them, and the
//! sink assembles the final document.
//!
//! [`Document`] is the default sink; it serializes to the JSON:API layout.

pub mod store;

pub use store::Document;

use crate::link::LinkRecord;
use crate::schema::Attributes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resource as resolved by its schema, without its relationships.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceObject {
    pub resource_type: String,
    pub id: String,
    pub attributes: Attributes,
    pub self_url: Option<String>,
    pub meta: Option<Value>,
}

/// Where an emitted resource object lives in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementHandle {
    Data(usize),
    Included(usize),
}

/// Document-level links, usually pagination. Absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentLinks {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl DocumentLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self(mut self, url: impl Into<String>) -> Self {
        self.self_url = Some(url.into());
        self
    }

    pub fn with_first(mut self, url: impl Into<String>) -> Self {
        self.first = Some(url.into());
        self
    }

    pub fn with_last(mut self, url: impl Into<String>) -> Self {
        self.last = Some(url.into());
        self
    }

    pub fn with_prev(mut self, url: impl Into<String>) -> Self {
        self.prev = Some(url.into());
        self
    }

    pub fn with_next(mut self, url: impl Into<String>) -> Self {
        self.next = Some(url.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.self_url.is_none()
            && self.first.is_none()
            && self.last.is_none()
            && self.prev.is_none()
            && self.next.is_none()
    }
}

/// Mutation contract between the encoder and a document under construction.
///
/// The encoder validates its input before calling any of these, so
/// implementations only store what they are given. Relationship records
/// always refer to a handle returned earlier in the same encode call.
pub trait DocumentSink {
    fn set_data_null(&mut self);

    fn set_data_empty(&mut self);

    /// Sets the primary data to one resource object (`data: {...}`).
    fn set_data_single(&mut self, element: ResourceObject) -> ElementHandle;

    /// Appends a resource object to collection data (`data: [...]`).
    fn add_to_data(&mut self, element: ResourceObject) -> ElementHandle;

    fn add_to_included(&mut self, element: ResourceObject) -> ElementHandle;

    fn add_relationship(&mut self, owner: ElementHandle, link: LinkRecord);

    fn set_meta(&mut self, meta: Value);

    fn set_links(&mut self, links: &DocumentLinks);
}
