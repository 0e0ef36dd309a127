//! Ingestion Module
//!
//! Seeds the backing collection with a small fixed corpus so the search
//! endpoint has data to work with out of the box.
//!
//! ## Workflow
//! 1. **Index**: Ensures the text index over `title` and `description` exists.
//! 2. **Insert**: Appends the five-document sample corpus to the collection.
//! 3. **Report**: Returns a human-readable confirmation with the insert count.

pub mod handlers;
pub mod types;
