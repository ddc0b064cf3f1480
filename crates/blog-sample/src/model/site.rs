use super::Post;

/// The blog itself: the root of the object graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: u32,
    pub name: String,
    pub posts: Vec<Post>,
}
