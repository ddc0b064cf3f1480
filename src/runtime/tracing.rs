//! # Observability & Tracing
//!
//! The encoder logs with the `tracing` crate; installing a subscriber is left
//! to the application. [`setup_tracing`] installs a compact `fmt` subscriber
//! filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Encode calls**: a span per `Encoder::encode` with the data kind
//! - **Primary data**: resource type and count (`debug`)
//! - **Relationships**: dotted path and depth of every relationship visited (`trace`)
//! - **Depth truncation**: the path that hit a schema's include limit (`debug`)
//! - **Failures**: invalid input and traversal errors (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Failures only
//! RUST_LOG=warn cargo run -p blog-sample
//!
//! # Include-depth decisions
//! RUST_LOG=jsonapi_encoder=debug cargo run -p blog-sample
//!
//! # Every relationship visited
//! RUST_LOG=jsonapi_encoder=trace cargo run -p blog-sample
//! ```
//!
//! With `RUST_LOG=trace` the walk of a post with an included author and the
//! author's publisher reads:
//!
//! ```text
//! DEBUG encode{data="single"}: Encoding single resource resource_type="posts"
//! TRACE encode{data="single"}: Relationship path=author depth=1
//! TRACE encode{data="single"}: Relationship path=author.publisher depth=2
//! DEBUG encode{data="single"}: Include depth reached path=author.publisher.country depth=3 limit=2
//! ```

/// Initializes the tracing subscriber.
///
/// Set `RUST_LOG` to control verbosity, e.g. `RUST_LOG=jsonapi_encoder=debug`.
/// Panics if a global subscriber is already installed; call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
