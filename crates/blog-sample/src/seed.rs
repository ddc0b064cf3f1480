//! A seeded blog used by the binary and the integration tests.
//!
//! ```text
//! site 1 "Tech Blog"
//! ├── post 1 by Dan (9), category Rust (2) -> Programming (1)
//! │   ├── comment 5 by Ana (2)
//! │   └── comment 12 by Dan (9)
//! └── post 2 by Ana (2), no comments, no category
//! ```

use crate::model::{Author, Category, Comment, Post, Site};
use std::rc::Rc;

pub fn blog() -> Site {
    let dan = Rc::new(Author::new(9, "Dan", "Gebhardt"));
    let ana = Rc::new(Author::new(2, "Ana", "Lee"));

    let programming = Rc::new(Category::root(1, "Programming"));
    let rust = Rc::new(Category::child_of(&programming, 2, "Rust"));

    let bikeshed = Post::new(
        1,
        "JSON API paints my bikeshed!",
        "The shortest article. Ever.",
        &dan,
    )
    .with_comment(Comment::new(5, "First!", &ana))
    .with_comment(Comment::new(12, "I like XML better", &dan))
    .in_category(&rust);

    let traits = Post::new(2, "Trait objects", "Dispatch at runtime.", &ana);

    Site {
        id: 1,
        name: "Tech Blog".to_string(),
        posts: vec![bikeshed, traits],
    }
}
