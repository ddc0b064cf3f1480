//! Plain domain structs. None of them know about the output format.

mod author;
mod category;
mod post;
mod site;

pub use author::Author;
pub use category::Category;
pub use post::{Comment, Post};
pub use site::Site;
