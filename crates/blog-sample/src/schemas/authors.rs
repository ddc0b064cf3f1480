use super::serialized_attributes;
use crate::model::Author;
use jsonapi_encoder::{Attributes, LinkDescriptor, LinkedData, Schema};

pub struct AuthorSchema;

impl Schema for AuthorSchema {
    type Resource = Author;

    fn resource_type(&self) -> &str {
        "people"
    }

    fn id(&self, author: &Author) -> String {
        author.id.to_string()
    }

    fn attributes(&self, author: &Author) -> Attributes {
        serialized_attributes(author)
    }

    // Posts are not loaded from the author side; link to them instead.
    fn relationships<'a>(&self, _author: &'a Author) -> Vec<LinkDescriptor<'a>> {
        vec![LinkDescriptor::new("posts", LinkedData::None).as_reference()]
    }
}
