use super::{Author, Category};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
    pub author: Rc<Author>,
    pub comments: Vec<Comment>,
    pub category: Option<Rc<Category>>,
}

impl Post {
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>, author: &Rc<Author>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author: Rc::clone(author),
            comments: Vec::new(),
            category: None,
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn in_category(mut self, category: &Rc<Category>) -> Self {
        self.category = Some(Rc::clone(category));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: u32,
    pub body: String,
    pub author: Rc<Author>,
}

impl Comment {
    pub fn new(id: u32, body: impl Into<String>, author: &Rc<Author>) -> Self {
        Self {
            id,
            body: body.into(),
            author: Rc::clone(author),
        }
    }
}
