//! The encoding engine.
//!
//! # Main Components
//!
//! - [`Encoder`] - Entry point: `encode`, `encode_value`, `encode_into`
//! - [`LinkStack`] - Relationship path bounding the traversal depth
//!
//! The `core` module documents the order in which the traversal emits output.

pub mod core;
pub mod stack;

pub use self::core::Encoder;
pub use self::stack::{LinkStack, StackFrame};
