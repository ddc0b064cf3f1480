//! Default in-memory [`DocumentSink`].

use super::{DocumentLinks, DocumentSink, ElementHandle, ResourceObject};
use crate::link::{LinkRecord, LinkageIds};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// A resource object together with the relationships emitted for it.
#[derive(Debug, Clone, PartialEq)]
struct Element {
    object: ResourceObject,
    relationships: Vec<LinkRecord>,
}

impl Element {
    fn new(object: ResourceObject) -> Self {
        Self {
            object,
            relationships: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PrimaryData {
    Null,
    Single(Element),
    Many(Vec<Element>),
}

/// Accumulates a JSON:API document.
///
/// Serializes as `{ data, included?, links?, meta? }`; `included` only when
/// at least one resource was included, `links`/`meta` only when set.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    data: PrimaryData,
    included: Vec<Element>,
    links: Option<DocumentLinks>,
    meta: Option<Value>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            data: PrimaryData::Null,
            included: Vec::new(),
            links: None,
            meta: None,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn included_len(&self) -> usize {
        self.included.len()
    }

    /// The assembled document as a JSON value.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn element_mut(&mut self, handle: ElementHandle) -> Option<&mut Element> {
        match (handle, &mut self.data) {
            (ElementHandle::Data(0), PrimaryData::Single(element)) => Some(element),
            (ElementHandle::Data(index), PrimaryData::Many(elements)) => elements.get_mut(index),
            (ElementHandle::Data(_), _) => None,
            (ElementHandle::Included(index), _) => self.included.get_mut(index),
        }
    }
}

impl DocumentSink for Document {
    fn set_data_null(&mut self) {
        self.data = PrimaryData::Null;
    }

    fn set_data_empty(&mut self) {
        self.data = PrimaryData::Many(Vec::new());
    }

    fn set_data_single(&mut self, element: ResourceObject) -> ElementHandle {
        self.data = PrimaryData::Single(Element::new(element));
        ElementHandle::Data(0)
    }

    fn add_to_data(&mut self, element: ResourceObject) -> ElementHandle {
        match &mut self.data {
            PrimaryData::Many(elements) => {
                elements.push(Element::new(element));
                ElementHandle::Data(elements.len() - 1)
            }
            _ => {
                self.data = PrimaryData::Many(vec![Element::new(element)]);
                ElementHandle::Data(0)
            }
        }
    }

    fn add_to_included(&mut self, element: ResourceObject) -> ElementHandle {
        self.included.push(Element::new(element));
        ElementHandle::Included(self.included.len() - 1)
    }

    fn add_relationship(&mut self, owner: ElementHandle, link: LinkRecord) {
        match self.element_mut(owner) {
            Some(element) => element.relationships.push(link),
            None => tracing::warn!(?owner, link = %link.name, "Relationship for unknown element dropped"),
        }
    }

    fn set_meta(&mut self, meta: Value) {
        self.meta = Some(meta);
    }

    fn set_links(&mut self, links: &DocumentLinks) {
        self.links = Some(links.clone());
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

#[derive(Serialize)]
struct Identifier<'a> {
    #[serde(rename = "type")]
    resource_type: &'a str,
    id: &'a str,
}

#[derive(Serialize)]
struct SelfLink<'a> {
    #[serde(rename = "self")]
    self_url: &'a str,
}

#[derive(Serialize)]
struct RelationshipLinks<'a> {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    self_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    related: Option<&'a str>,
}

struct Linkage<'a> {
    resource_type: Option<&'a str>,
    ids: &'a LinkageIds,
}

impl Serialize for Linkage<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let resource_type = self.resource_type.unwrap_or_default();
        match self.ids {
            LinkageIds::Null => serializer.serialize_none(),
            LinkageIds::One(id) => Identifier { resource_type, id }.serialize(serializer),
            LinkageIds::Many(ids) => serializer.collect_seq(
                ids.iter().map(|id| Identifier { resource_type, id }),
            ),
        }
    }
}

struct Relationship<'a>(&'a LinkRecord);

impl Serialize for Relationship<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let link = self.0;
        let mut map = serializer.serialize_map(None)?;
        if !link.is_reference_only {
            if let Some(ids) = &link.linkage_ids {
                map.serialize_entry(
                    "data",
                    &Linkage {
                        resource_type: link.linkage_type.as_deref(),
                        ids,
                    },
                )?;
            }
        }
        if link.self_url.is_some() || link.related_url.is_some() {
            map.serialize_entry(
                "links",
                &RelationshipLinks {
                    self_url: link.self_url.as_deref(),
                    related: link.related_url.as_deref(),
                },
            )?;
        }
        if let Some(meta) = &link.meta {
            map.serialize_entry("meta", meta)?;
        }
        map.end()
    }
}

struct Relationships<'a>(&'a [LinkRecord]);

impl Serialize for Relationships<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|link| (&link.name, Relationship(link))))
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let object = &self.object;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &object.resource_type)?;
        map.serialize_entry("id", &object.id)?;
        if !object.attributes.is_empty() {
            map.serialize_entry("attributes", &object.attributes)?;
        }
        if !self.relationships.is_empty() {
            map.serialize_entry("relationships", &Relationships(&self.relationships))?;
        }
        if let Some(self_url) = &object.self_url {
            map.serialize_entry("links", &SelfLink { self_url })?;
        }
        if let Some(meta) = &object.meta {
            map.serialize_entry("meta", meta)?;
        }
        map.end()
    }
}

impl Serialize for PrimaryData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PrimaryData::Null => serializer.serialize_none(),
            PrimaryData::Single(element) => element.serialize(serializer),
            PrimaryData::Many(elements) => serializer.collect_seq(elements),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("data", &self.data)?;
        if !self.included.is_empty() {
            map.serialize_entry("included", &self.included)?;
        }
        if let Some(links) = &self.links {
            map.serialize_entry("links", links)?;
        }
        if let Some(meta) = &self.meta {
            map.serialize_entry("meta", meta)?;
        }
        map.end()
    }
}
