use serde::Serialize;
use std::rc::Rc;

/// A post category. Categories form a tree through `parent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    #[serde(skip)]
    pub id: u32,
    pub name: String,
    #[serde(skip)]
    pub parent: Option<Rc<Category>>,
}

impl Category {
    pub fn root(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
        }
    }

    pub fn child_of(parent: &Rc<Category>, id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: Some(Rc::clone(parent)),
        }
    }
}
