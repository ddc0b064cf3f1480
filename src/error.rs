//! # Encoder Errors
//!
//! Every failure of an encode call is one of these variants. There is no
//! partial-document fallback: a caller gets either a complete document or
//! an `EncodeError`.

use thiserror::Error;

/// Errors that can occur while encoding an object graph.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The top-level data is not null, a resource, or a collection of resources.
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(String),

    /// A non-empty top-level collection mixes objects of different runtime types.
    #[error("All resources in a collection must share one type: expected {expected}, found {found} at index {index}")]
    HeterogeneousCollection {
        expected: &'static str,
        found: &'static str,
        index: usize,
    },

    /// No schema is registered for the runtime type of an encountered object.
    #[error("Schema not found for {0}")]
    SchemaNotFound(&'static str),

    /// A relationship's linked data has an unsupported shape.
    #[error("Malformed linked data in relationship '{relationship}': {reason}")]
    MalformedLinkedData {
        relationship: String,
        reason: String,
    },

    /// A schema was asked to describe an object it does not handle.
    #[error("Schema for '{resource_type}' cannot handle {found}")]
    ResourceMismatch {
        resource_type: String,
        found: &'static str,
    },

    /// The assembled document nests deeper than the renderer allows.
    #[error("Document depth {depth} exceeds the limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rendered output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
