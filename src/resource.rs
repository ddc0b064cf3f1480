//! # Resources and Top-Level Data
//!
//! The encoder never knows the concrete types of the objects it walks. It sees
//! them as [`Resource`] trait objects and dispatches on their runtime type
//! ([`TypeId`]) to find the schema that describes them.
//!
//! [`Data`] is the shape of the top-level input: nothing, one resource, or a
//! collection of resources of a single type.

use std::any::{Any, TypeId};
use std::fmt;

/// A domain object that can be looked up in a [`SchemaRegistry`](crate::schema::SchemaRegistry).
///
/// Implemented for every `'static` type, so plain structs can be passed to the
/// encoder without any extra code.
pub trait Resource: Any {
    /// Upcast used for downcasting back to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// The Rust type name of the concrete value, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> Resource for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// The runtime type of a resource.
pub(crate) fn runtime_type(resource: &dyn Resource) -> TypeId {
    Any::type_id(resource.as_any())
}

/// The primary data of a document.
pub enum Data<'a> {
    /// `data: null`, no resource.
    Null,
    /// Exactly one resource.
    Single(&'a dyn Resource),
    /// An ordered collection of resources. An empty collection renders as
    /// `data: []`. A `None` entry is not a resource and is rejected.
    Collection(Vec<Option<&'a dyn Resource>>),
}

impl<'a> Data<'a> {
    pub fn null() -> Self {
        Data::Null
    }

    pub fn empty() -> Self {
        Data::Collection(Vec::new())
    }

    pub fn single<R: Resource>(resource: &'a R) -> Self {
        Data::Single(resource)
    }

    /// `Null` for `None`, `Single` otherwise.
    pub fn optional<R: Resource>(resource: Option<&'a R>) -> Self {
        match resource {
            Some(resource) => Data::Single(resource),
            None => Data::Null,
        }
    }

    pub fn collection<I, R>(resources: I) -> Self
    where
        I: IntoIterator<Item = &'a R>,
        R: Resource,
    {
        Data::Collection(
            resources
                .into_iter()
                .map(|resource| Some(resource as &dyn Resource))
                .collect(),
        )
    }

    /// A collection of already type-erased resources.
    pub fn collection_dyn(resources: Vec<&'a dyn Resource>) -> Self {
        Data::Collection(resources.into_iter().map(Some).collect())
    }

    /// A collection whose entries may be missing, e.g. the result of a batch
    /// lookup by id. Missing entries fail the encode with `InvalidInputShape`.
    pub fn sparse<I, R>(resources: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a R>>,
        R: Resource,
    {
        Data::Collection(
            resources
                .into_iter()
                .map(|resource| resource.map(|resource| resource as &dyn Resource))
                .collect(),
        )
    }

    /// Short label used in log events.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Data::Null => "null",
            Data::Single(_) => "single",
            Data::Collection(items) if items.is_empty() => "empty",
            Data::Collection(_) => "collection",
        }
    }
}

impl fmt::Debug for Data<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Null => f.write_str("Null"),
            Data::Single(resource) => f.debug_tuple("Single").field(&(*resource).type_name()).finish(),
            Data::Collection(items) => f
                .debug_tuple("Collection")
                .field(&items.iter().map(|item| item.map(|r| r.type_name())).collect::<Vec<_>>())
                .finish(),
        }
    }
}
