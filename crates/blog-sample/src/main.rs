//! # Blog Sample
//!
//! Encodes a seeded blog as JSON:API documents.
//!
//! 1.  The whole site with everything reachable within the schemas' include depths.
//! 2.  A page of posts with pagination links and meta.
//! 3.  An author, whose posts are only linked by URL.
//!
//! Run with `RUST_LOG=jsonapi_encoder=trace` to watch the traversal.

use blog_sample::{schemas, seed};
use jsonapi_encoder::runtime::setup_tracing;
use jsonapi_encoder::{Data, DocumentLinks, EncodeError, Encoder, RenderOptions};
use serde_json::json;
use tracing::info;

fn main() -> Result<(), EncodeError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let encoder = Encoder::instance(schemas::registry(), RenderOptions::pretty());
    let site = seed::blog();

    info!(site = site.id, posts = site.posts.len(), "Encoding site");
    let document = encoder.encode(Data::single(&site), None, None, None)?;
    println!("{}", document);

    let links = DocumentLinks::new()
        .with_self("http://example.com/posts?page=1")
        .with_first("http://example.com/posts?page=1")
        .with_last("http://example.com/posts?page=1");
    let meta = json!({ "total": site.posts.len() });

    info!("Encoding post page");
    let document = encoder.encode(Data::collection(&site.posts), Some(&links), Some(meta), None)?;
    println!("{}", document);

    let compact = RenderOptions::default();
    let author = &site.posts[0].author;
    info!(author = author.id, "Encoding author");
    let document = encoder.encode(Data::single(&**author), None, None, Some(&compact))?;
    println!("{}", document);

    info!("Sample completed successfully");
    Ok(())
}
