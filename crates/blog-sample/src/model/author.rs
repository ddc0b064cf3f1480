use serde::Serialize;

/// A person writing posts and comments.
///
/// Serializes to its attribute set; the id is carried separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    #[serde(skip)]
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(id: u32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
