use super::serialized_attributes;
use crate::model::Category;
use jsonapi_encoder::{Attributes, LinkDescriptor, LinkedData, Schema};

pub struct CategorySchema;

impl Schema for CategorySchema {
    type Resource = Category;

    fn resource_type(&self) -> &str {
        "categories"
    }

    fn id(&self, category: &Category) -> String {
        category.id.to_string()
    }

    fn attributes(&self, category: &Category) -> Attributes {
        serialized_attributes(category)
    }

    fn relationships<'a>(&self, category: &'a Category) -> Vec<LinkDescriptor<'a>> {
        vec![LinkDescriptor::new("parent", LinkedData::optional(category.parent.as_deref())).include()]
    }

    fn max_include_depth(&self) -> usize {
        3
    }
}
