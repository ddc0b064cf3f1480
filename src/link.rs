//! # Relationships
//!
//! A schema describes each relationship of a resource with a [`LinkDescriptor`].
//! The encoder reads the descriptors in order and turns each one into a
//! [`LinkRecord`] for the document accumulator.
//!
//! ## Three linkage states
//!
//! Linked data distinguishes "no related resource" from "zero related
//! resources", and both from a populated relationship:
//!
//! | `LinkedData`            | rendered `data` |
//! |-------------------------|-----------------|
//! | `None`                  | `null`          |
//! | `Collection(vec![])`    | `[]`            |
//! | `Single(x)`             | `{type, id}`    |
//! | `Collection([x, y])`    | `[{..}, {..}]`  |

use crate::resource::Resource;
use serde_json::Value;
use std::fmt;

/// The related object(s) of one relationship.
pub enum LinkedData<'a> {
    None,
    Single(&'a dyn Resource),
    Collection(Vec<&'a dyn Resource>),
}

impl<'a> LinkedData<'a> {
    pub fn single<R: Resource>(resource: &'a R) -> Self {
        LinkedData::Single(resource)
    }

    /// `None` for a missing to-one relationship.
    pub fn optional<R: Resource>(resource: Option<&'a R>) -> Self {
        match resource {
            Some(resource) => LinkedData::Single(resource),
            None => LinkedData::None,
        }
    }

    pub fn collection<I, R>(resources: I) -> Self
    where
        I: IntoIterator<Item = &'a R>,
        R: Resource,
    {
        LinkedData::Collection(
            resources
                .into_iter()
                .map(|resource| resource as &dyn Resource)
                .collect(),
        )
    }

    /// `true` for `None` and for an empty collection.
    pub fn is_empty(&self) -> bool {
        match self {
            LinkedData::None => true,
            LinkedData::Single(_) => false,
            LinkedData::Collection(items) => items.is_empty(),
        }
    }

    /// The linked objects in order; a single object yields one item.
    pub fn as_slice(&self) -> &[&'a dyn Resource] {
        match self {
            LinkedData::None => &[],
            LinkedData::Single(resource) => std::slice::from_ref(resource),
            LinkedData::Collection(items) => items,
        }
    }
}

impl fmt::Debug for LinkedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkedData::None => f.write_str("None"),
            LinkedData::Single(resource) => f.debug_tuple("Single").field(&(*resource).type_name()).finish(),
            LinkedData::Collection(items) => f
                .debug_tuple("Collection")
                .field(&items.len())
                .finish(),
        }
    }
}

/// Describes one relationship of a resource.
///
/// Built with [`LinkDescriptor::new`] and the flag setters:
///
/// ```rust
/// use jsonapi_encoder::link::{LinkDescriptor, LinkedData};
///
/// struct Person;
/// let author = Person;
///
/// let link = LinkDescriptor::new("author", LinkedData::single(&author))
///     .include()
///     .show_related();
/// assert!(link.should_be_included);
/// assert_eq!(link.related_sub_url, "/author");
/// ```
#[derive(Debug)]
pub struct LinkDescriptor<'a> {
    pub name: String,
    pub data: LinkedData<'a>,
    /// Render only a related URL: no linkage, never included.
    pub show_as_reference: bool,
    pub should_be_included: bool,
    pub show_self: bool,
    pub show_related: bool,
    pub show_meta: bool,
    /// Appended to the owning resource's self URL.
    pub self_sub_url: String,
    /// Appended to the owning resource's self URL.
    pub related_sub_url: String,
}

impl<'a> LinkDescriptor<'a> {
    pub fn new(name: impl Into<String>, data: LinkedData<'a>) -> Self {
        let name = name.into();
        Self {
            self_sub_url: format!("/links/{}", name),
            related_sub_url: format!("/{}", name),
            name,
            data,
            show_as_reference: false,
            should_be_included: false,
            show_self: false,
            show_related: false,
            show_meta: false,
        }
    }

    pub fn as_reference(mut self) -> Self {
        self.show_as_reference = true;
        self
    }

    pub fn include(mut self) -> Self {
        self.should_be_included = true;
        self
    }

    pub fn show_self(mut self) -> Self {
        self.show_self = true;
        self
    }

    pub fn show_related(mut self) -> Self {
        self.show_related = true;
        self
    }

    pub fn show_meta(mut self) -> Self {
        self.show_meta = true;
        self
    }

    pub fn with_self_sub_url(mut self, sub_url: impl Into<String>) -> Self {
        self.self_sub_url = sub_url.into();
        self
    }

    pub fn with_related_sub_url(mut self, sub_url: impl Into<String>) -> Self {
        self.related_sub_url = sub_url.into();
        self
    }
}

/// Resource linkage of a relationship.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkageIds {
    /// Null to-one relationship.
    Null,
    /// To-one relationship.
    One(String),
    /// To-many relationship; empty for `[]`.
    Many(Vec<String>),
}

/// A relationship as emitted into the document.
///
/// A reference-only record never carries linkage: `linkage_type` and
/// `linkage_ids` are `None` and only `related_url` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub name: String,
    pub is_reference_only: bool,
    pub linkage_type: Option<String>,
    pub linkage_ids: Option<LinkageIds>,
    pub self_url: Option<String>,
    pub related_url: Option<String>,
    pub meta: Option<Value>,
}

impl LinkRecord {
    pub fn reference(name: impl Into<String>, related_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_reference_only: true,
            linkage_type: None,
            linkage_ids: None,
            self_url: None,
            related_url: Some(related_url.into()),
            meta: None,
        }
    }
}
