//! # Blog Sample Library
//!
//! A small blog domain encoded with `jsonapi-encoder`. Exposes the model, the
//! schemas, and a seeded object graph for the binary and integration tests.

pub mod model;
pub mod schemas;
pub mod seed;
