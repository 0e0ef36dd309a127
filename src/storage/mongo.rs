use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, IndexModel};

use super::TextSearchStore;
use crate::config::Config;

/// MongoDB-backed implementation of [`TextSearchStore`].
///
/// Holds a single driver handle created at process start. The driver pools
/// connections internally and its handles are `Send + Sync`, so one value
/// behind an `Arc` serves all concurrent requests without extra locking.
pub struct MongoTextStore {
    collection: Collection<Document>,
}

impl MongoTextStore {
    /// Builds the client and binds the working collection.
    ///
    /// The driver connects lazily: a bad address surfaces on the first
    /// operation, not here.
    pub async fn connect(config: &Config) -> Result<Self> {
        tracing::info!("Connecting to MongoDB at {}", config.mongo_uri);

        let client = Client::with_uri_str(&config.mongo_uri)
            .await
            .context("failed to initialize MongoDB client")?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Ok(Self { collection })
    }
}

// Driver failures pass through unwrapped so their text reaches the caller
// verbatim.
#[async_trait]
impl TextSearchStore for MongoTextStore {
    async fn text_search(&self, query: &str, limit: i64) -> Result<Vec<Document>> {
        let cursor = self
            .collection
            .find(doc! { "$text": { "$search": query } })
            .projection(doc! { "score": { "$meta": "textScore" } })
            .sort(doc! { "score": { "$meta": "textScore" } })
            .limit(limit)
            .await?;

        let documents: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!(
            "Text search for {:?} matched {} document(s)",
            query,
            documents.len()
        );

        Ok(documents)
    }

    async fn ensure_text_index(&self, fields: &[&str]) -> Result<()> {
        let mut keys = Document::new();
        for field in fields {
            keys.insert(*field, "text");
        }

        let index = IndexModel::builder().keys(keys).build();
        let created = self.collection.create_index(index).await?;

        tracing::debug!("Text index present: {}", created.index_name);

        Ok(())
    }

    async fn insert_documents(&self, documents: Vec<Document>) -> Result<usize> {
        let result = self.collection.insert_many(documents).await?;

        Ok(result.inserted_ids.len())
    }
}
