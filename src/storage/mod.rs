//! Document Store Access
//!
//! Thin access layer over MongoDB's text-search capability.
//!
//! ## Core Concepts
//! - **Delegation**: Tokenization, indexing, and relevance scoring all happen
//!   inside the store; this layer only issues operations and moves documents.
//! - **Seam**: Handlers depend on the [`TextSearchStore`] trait, not the
//!   driver, so tests can substitute an in-memory implementation.
//! - **Sharing**: The process constructs one store value at startup and
//!   shares it across request tasks behind an `Arc`.

use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::Document;

pub mod mongo;

pub use mongo::MongoTextStore;

/// Operations the request handlers need from the document store.
///
/// Every method is a single round trip; failures carry the store's own
/// error text so callers can surface it unchanged.
#[async_trait]
pub trait TextSearchStore: Send + Sync {
    /// Runs a relevance-ranked text search, returning at most `limit`
    /// documents in descending score order. Each document carries the
    /// engine-assigned `score` field alongside its stored fields.
    async fn text_search(&self, query: &str, limit: i64) -> Result<Vec<Document>>;

    /// Ensures a text index over `fields` exists. Creating an index that is
    /// already present is a no-op.
    async fn ensure_text_index(&self, fields: &[&str]) -> Result<()>;

    /// Appends `documents` to the collection and returns the inserted count.
    /// No deduplication happens at any layer.
    async fn insert_documents(&self, documents: Vec<Document>) -> Result<usize>;
}
