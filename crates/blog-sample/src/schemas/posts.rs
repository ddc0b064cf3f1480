use crate::model::{Comment, Post};
use jsonapi_encoder::{Attributes, LinkDescriptor, LinkedData, Schema};
use serde_json::{json, Value};

pub struct PostSchema;

impl Schema for PostSchema {
    type Resource = Post;

    fn resource_type(&self) -> &str {
        "posts"
    }

    fn id(&self, post: &Post) -> String {
        post.id.to_string()
    }

    fn attributes(&self, post: &Post) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("title".into(), json!(post.title));
        attributes.insert("body".into(), json!(post.body));
        attributes
    }

    fn relationships<'a>(&self, post: &'a Post) -> Vec<LinkDescriptor<'a>> {
        vec![
            LinkDescriptor::new("author", LinkedData::single(&*post.author))
                .include()
                .show_related(),
            LinkDescriptor::new("comments", LinkedData::collection(&post.comments))
                .include()
                .show_self()
                .show_meta(),
            LinkDescriptor::new("category", LinkedData::optional(post.category.as_deref())).include(),
        ]
    }

    fn max_include_depth(&self) -> usize {
        2
    }

    fn show_self_in_included(&self) -> bool {
        true
    }
}

pub struct CommentSchema;

impl Schema for CommentSchema {
    type Resource = Comment;

    fn resource_type(&self) -> &str {
        "comments"
    }

    fn id(&self, comment: &Comment) -> String {
        comment.id.to_string()
    }

    fn attributes(&self, comment: &Comment) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("body".into(), json!(comment.body));
        attributes
    }

    /// Comment count of a `comments` relationship.
    fn relationship_meta(&self, linked: &[&Comment]) -> Option<Value> {
        Some(json!({ "count": linked.len() }))
    }

    fn relationships<'a>(&self, comment: &'a Comment) -> Vec<LinkDescriptor<'a>> {
        vec![LinkDescriptor::new("author", LinkedData::single(&*comment.author)).include()]
    }

    fn max_include_depth(&self) -> usize {
        3
    }
}
