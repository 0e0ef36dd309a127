//! Ingestion Data Types
//!
//! Data Transfer Objects (DTOs) for the seeding endpoint: the fixed sample
//! record shape and the API response.

use serde::{Deserialize, Serialize};

/// A demonstration record: one title/description text pair.
///
/// These are created only through the seeding endpoint and never mutated or
/// deleted by this service. Both fields are covered by the text index the
/// seeder guarantees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDocument {
    pub title: String,
    pub description: String,
}

/// Response returned once the sample batch has been stored.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
}
