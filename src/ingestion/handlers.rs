use axum::{Extension, Json};
use mongodb::bson;
use std::sync::Arc;

use super::types::{SampleDocument, SeedResponse};
use crate::error::ApiError;
use crate::storage::TextSearchStore;

/// Fields covered by the text index the seeder guarantees.
pub const TEXT_INDEX_FIELDS: [&str; 2] = ["title", "description"];

pub async fn handle_add_sample_data(
    Extension(store): Extension<Arc<dyn TextSearchStore>>,
) -> Result<Json<SeedResponse>, ApiError> {
    // Index creation comes first; it is a no-op when the index exists.
    store.ensure_text_index(&TEXT_INDEX_FIELDS).await?;

    let documents = sample_documents()
        .iter()
        .map(bson::to_document)
        .collect::<Result<Vec<_>, _>>()
        .map_err(anyhow::Error::from)?;

    let inserted = store.insert_documents(documents).await?;
    tracing::info!("Seeded {} sample document(s)", inserted);

    Ok(Json(SeedResponse {
        message: format!("Added {} sample documents", inserted),
    }))
}

/// The fixed demonstration corpus. Every call appends these as-is, so
/// repeated seeding produces duplicates.
pub fn sample_documents() -> Vec<SampleDocument> {
    [
        ("MongoDB Tutorial", "Learn how to use MongoDB with Rust"),
        ("React Search Component", "Building a search bar in React"),
        ("Axum API Development", "Creating REST APIs with Axum"),
        (
            "Database Indexing",
            "Optimize your MongoDB queries with proper indexing",
        ),
        (
            "Full-Stack Development",
            "Connecting a React frontend with a Rust backend",
        ),
    ]
    .into_iter()
    .map(|(title, description)| SampleDocument {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}
