//! # Encoding Engine
//!
//! This module walks an object graph and feeds a [`DocumentSink`].
//!
//! ## Key Types
//!
//! - [`Encoder`]: Entry point. Owns the schema registry and default render options.
//! - `Walker`: Per-call traversal state (registry, sink).
//! - [`LinkStack`]: The relationship path, created fresh for each call.
//!
//! ## Traversal
//!
//! Primary resources are emitted first, in input order. For each resource the
//! schema's relationships are visited in declared order; an included
//! relationship emits its targets into `included` and then descends into
//! their relationships before moving to the next sibling (depth first).
//!
//! Recursion is bounded by the length of the relationship path, not by object
//! identity. A relationship is skipped entirely once the path is longer than
//! the owning schema's `max_include_depth`, so a cyclic graph is walked to
//! that depth and no further. The same resource reached through two paths is
//! included twice.

use crate::document::{Document, DocumentLinks, DocumentSink, ElementHandle, ResourceObject};
use crate::encoder::stack::LinkStack;
use crate::error::EncodeError;
use crate::link::{LinkDescriptor, LinkRecord, LinkedData, LinkageIds};
use crate::render::{render, RenderOptions};
use crate::resource::{runtime_type, Data, Resource};
use crate::schema::{SchemaProvider, SchemaRegistry};
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};

// =============================================================================
// 1. THE ENCODER
// =============================================================================

/// Encodes object graphs into JSON:API documents.
///
/// ```rust
/// use jsonapi_encoder::{Data, Encoder, Schema, SchemaRegistry};
///
/// struct Tag { slug: &'static str }
/// struct TagSchema;
///
/// impl Schema for TagSchema {
///     type Resource = Tag;
///     fn resource_type(&self) -> &str { "tags" }
///     fn id(&self, tag: &Tag) -> String { tag.slug.to_string() }
/// }
///
/// let encoder = Encoder::new(SchemaRegistry::new().with(TagSchema));
/// let json = encoder.encode(Data::single(&Tag { slug: "rust" }), None, None, None).unwrap();
/// assert_eq!(json, r#"{"data":{"type":"tags","id":"rust","links":{"self":"/tags/rust"}}}"#);
/// ```
pub struct Encoder {
    registry: SchemaRegistry,
    options: RenderOptions,
}

impl Encoder {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            options: RenderOptions::default(),
        }
    }

    /// Factory taking both the schemas and the default render options.
    pub fn instance(registry: SchemaRegistry, options: RenderOptions) -> Self {
        Self { registry, options }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Encodes `data` and renders the document.
    ///
    /// `links` and `meta` go to the top level of the document. `options`
    /// overrides the encoder's default render options for this call only.
    #[instrument(skip_all, fields(data = data.kind()))]
    pub fn encode(
        &self,
        data: Data<'_>,
        links: Option<&DocumentLinks>,
        meta: Option<Value>,
        options: Option<&RenderOptions>,
    ) -> Result<String, EncodeError> {
        let value = self.encode_value(data, links, meta)?;
        render(&value, options.unwrap_or(&self.options)).inspect_err(|e| warn!(error = %e, "Render failed"))
    }

    /// Encodes `data` into a JSON value without rendering it.
    pub fn encode_value(
        &self,
        data: Data<'_>,
        links: Option<&DocumentLinks>,
        meta: Option<Value>,
    ) -> Result<Value, EncodeError> {
        let mut document = Document::new();
        self.encode_into(&mut document, data, links, meta)?;
        Ok(document.to_value()?)
    }

    /// Populates `document` with the encoding of `data`.
    ///
    /// The input shape and the top-level schema are validated before the
    /// sink is touched. If traversal fails later, the sink is left partially
    /// populated and should be discarded.
    pub fn encode_into<D: DocumentSink + ?Sized>(
        &self,
        document: &mut D,
        data: Data<'_>,
        links: Option<&DocumentLinks>,
        meta: Option<Value>,
    ) -> Result<(), EncodeError> {
        let kind = data.kind();
        let primary = self
            .validate(data)
            .inspect_err(|e| warn!(data = kind, error = %e, "Invalid input"))?;

        if let Some(meta) = meta {
            document.set_meta(meta);
        }
        if let Some(links) = links.filter(|links| !links.is_empty()) {
            document.set_links(links);
        }

        // Fresh per call: nothing from an earlier (possibly failed) call leaks in.
        let mut stack = LinkStack::new();
        let mut walker = Walker {
            registry: &self.registry,
            document,
        };
        walker
            .emit_primary(&mut stack, primary)
            .inspect_err(|e| warn!(data = kind, error = %e, "Encode failed"))?;

        debug!(data = kind, "Encoded");
        Ok(())
    }

    /// Checks the top-level shape and resolves the primary schema.
    fn validate<'d>(&self, data: Data<'d>) -> Result<Primary<'d, '_>, EncodeError> {
        match data {
            Data::Null => Ok(Primary::Null),
            Data::Collection(items) if items.is_empty() => Ok(Primary::Empty),
            Data::Single(resource) => {
                let schema = self.registry.get(resource)?;
                Ok(Primary::Single(resource, schema))
            }
            Data::Collection(items) => {
                let resources = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        item.ok_or_else(|| {
                            EncodeError::InvalidInputShape(format!(
                                "collection entry {} is not a resource",
                                index
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let first = resources[0];
                let expected = runtime_type(first);
                if let Some((index, other)) = resources
                    .iter()
                    .enumerate()
                    .find(|(_, other)| runtime_type(**other) != expected)
                {
                    return Err(EncodeError::HeterogeneousCollection {
                        expected: first.type_name(),
                        found: (*other).type_name(),
                        index,
                    });
                }

                let schema = self.registry.get(first)?;
                Ok(Primary::Collection(resources, schema))
            }
        }
    }
}

/// Validated primary data with its schema resolved.
enum Primary<'d, 'r> {
    Null,
    Empty,
    Single(&'d dyn Resource, &'r dyn SchemaProvider),
    Collection(Vec<&'d dyn Resource>, &'r dyn SchemaProvider),
}

// =============================================================================
// 2. THE TRAVERSAL
// =============================================================================

struct Walker<'e, D: DocumentSink + ?Sized> {
    registry: &'e SchemaRegistry,
    document: &'e mut D,
}

impl<'e, D: DocumentSink + ?Sized> Walker<'e, D> {
    fn emit_primary(&mut self, stack: &mut LinkStack, primary: Primary<'_, 'e>) -> Result<(), EncodeError> {
        match primary {
            Primary::Null => self.document.set_data_null(),
            Primary::Empty => self.document.set_data_empty(),
            Primary::Single(resource, schema) => {
                debug!(resource_type = schema.resource_type(), "Encoding single resource");
                let (element, self_url) = primary_element(resource, schema)?;
                let handle = self.document.set_data_single(element);
                self.walk_links(stack, handle, resource, &self_url, schema)?;
            }
            Primary::Collection(resources, schema) => {
                debug!(resource_type = schema.resource_type(), count = resources.len(), "Encoding collection");
                for resource in resources {
                    let (element, self_url) = primary_element(resource, schema)?;
                    let handle = self.document.add_to_data(element);
                    self.walk_links(stack, handle, resource, &self_url, schema)?;
                }
            }
        }
        Ok(())
    }

    /// Emits the relationships of `resource` onto `owner`, including linked
    /// resources where requested.
    fn walk_links(
        &mut self,
        stack: &mut LinkStack,
        owner: ElementHandle,
        resource: &dyn Resource,
        self_url: &str,
        schema: &'e dyn SchemaProvider,
    ) -> Result<(), EncodeError> {
        for link in schema.link_descriptors(resource)? {
            let mut frame = stack.enter(&link.name);
            let depth = frame.depth();

            if depth > schema.max_include_depth() {
                debug!(path = %frame.path(), depth, limit = schema.max_include_depth(), "Include depth reached");
                continue;
            }
            trace!(path = %frame.path(), depth, "Relationship");

            if link.show_as_reference {
                let related_url = format!("{}{}", self_url, link.related_sub_url);
                self.document
                    .add_relationship(owner, LinkRecord::reference(link.name.as_str(), related_url));
                continue;
            }

            let linkage_schema = self.linkage_schema(&link)?;
            let record = link_record(&link, self_url, linkage_schema)?;
            self.document.add_relationship(owner, record);

            if !link.should_be_included {
                continue;
            }
            let Some(linkage_schema) = linkage_schema else {
                continue;
            };

            for &linked in link.data.as_slice() {
                let linked_self_url = linkage_schema.self_url(linked)?;
                let element = ResourceObject {
                    resource_type: linkage_schema.resource_type().to_string(),
                    id: linkage_schema.id(linked)?,
                    attributes: linkage_schema.attributes(linked)?,
                    self_url: schema.show_self_in_included().then(|| linked_self_url.clone()),
                    meta: if schema.show_meta_in_included() {
                        linkage_schema.meta(linked)?
                    } else {
                        None
                    },
                };
                let handle = self.document.add_to_included(element);
                self.walk_links(&mut frame, handle, linked, &linked_self_url, linkage_schema)?;
            }
        }
        Ok(())
    }

    /// The schema of a relationship's linked objects; `None` when there are none.
    fn linkage_schema(&self, link: &LinkDescriptor<'_>) -> Result<Option<&'e dyn SchemaProvider>, EncodeError> {
        let registry = self.registry;
        let linked = link.data.as_slice();
        let Some(&first) = linked.first() else {
            return Ok(None);
        };

        let expected = runtime_type(first);
        if let Some(other) = linked.iter().find(|other| runtime_type(**other) != expected) {
            return Err(EncodeError::MalformedLinkedData {
                relationship: link.name.clone(),
                reason: format!(
                    "collection mixes {} and {}",
                    first.type_name(),
                    (*other).type_name()
                ),
            });
        }

        registry.get(first).map(Some)
    }
}

fn primary_element(
    resource: &dyn Resource,
    schema: &dyn SchemaProvider,
) -> Result<(ResourceObject, String), EncodeError> {
    let self_url = schema.self_url(resource)?;
    let element = ResourceObject {
        resource_type: schema.resource_type().to_string(),
        id: schema.id(resource)?,
        attributes: schema.attributes(resource)?,
        self_url: Some(self_url.clone()),
        meta: schema.meta(resource)?,
    };
    Ok((element, self_url))
}

fn link_record(
    link: &LinkDescriptor<'_>,
    self_url: &str,
    linkage_schema: Option<&dyn SchemaProvider>,
) -> Result<LinkRecord, EncodeError> {
    let (linkage_type, linkage_ids) = match (&link.data, linkage_schema) {
        (LinkedData::Single(resource), Some(schema)) => (
            Some(schema.resource_type().to_string()),
            LinkageIds::One(schema.id(*resource)?),
        ),
        (LinkedData::Collection(items), Some(schema)) => (
            Some(schema.resource_type().to_string()),
            LinkageIds::Many(
                items
                    .iter()
                    .map(|item| schema.id(*item))
                    .collect::<Result<_, _>>()?,
            ),
        ),
        (LinkedData::Collection(_), None) => (None, LinkageIds::Many(Vec::new())),
        (_, _) => (None, LinkageIds::Null),
    };

    let meta = match linkage_schema {
        Some(schema) if link.show_meta => schema.relationship_meta(link.data.as_slice())?,
        _ => None,
    };

    Ok(LinkRecord {
        name: link.name.clone(),
        is_reference_only: false,
        linkage_type,
        linkage_ids: Some(linkage_ids),
        self_url: link
            .show_self
            .then(|| format!("{}{}", self_url, link.self_sub_url)),
        related_url: link
            .show_related
            .then(|| format!("{}{}", self_url, link.related_sub_url)),
        meta,
    })
}
