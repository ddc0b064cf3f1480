use crate::model::Site;
use jsonapi_encoder::{Attributes, LinkDescriptor, LinkedData, Schema};
use serde_json::{json, Value};

pub struct SiteSchema;

impl Schema for SiteSchema {
    type Resource = Site;

    fn resource_type(&self) -> &str {
        "sites"
    }

    fn id(&self, site: &Site) -> String {
        site.id.to_string()
    }

    fn attributes(&self, site: &Site) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("name".into(), json!(site.name));
        attributes
    }

    fn meta(&self, site: &Site) -> Option<Value> {
        Some(json!({ "post_count": site.posts.len() }))
    }

    fn relationships<'a>(&self, site: &'a Site) -> Vec<LinkDescriptor<'a>> {
        vec![LinkDescriptor::new("posts", LinkedData::collection(&site.posts)).include()]
    }

    fn max_include_depth(&self) -> usize {
        3
    }
}
