//! Full-Text Search Service Library
//!
//! This library crate defines the core modules that make up the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of six loosely coupled subsystems:
//!
//! - **`config`**: Environment-driven settings naming the MongoDB deployment,
//!   database, and collection to work against.
//! - **`error`**: The API error type and its HTTP renderings (validation
//!   rejections and upstream store failures).
//! - **`ingestion`**: The seeding pipeline. Guarantees the text index and
//!   loads a fixed sample corpus for demonstrations.
//! - **`search`**: The core retrieval logic. Validates queries and returns
//!   relevance-ranked matches from the text index.
//! - **`storage`**: The persistence layer. Wraps the MongoDB driver behind
//!   the `TextSearchStore` seam so handlers stay backend-agnostic.
//! - **`ui`**: The embedded browser console for running queries interactively.

use std::sync::Arc;

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod ingestion;
pub mod search;
pub mod storage;
pub mod ui;

use crate::ingestion::handlers::handle_add_sample_data;
use crate::search::handlers::handle_search;
use crate::storage::TextSearchStore;

/// Assembles the HTTP application around the given store.
///
/// Routes:
/// - `GET /` serves the embedded search console.
/// - `POST /search` runs a relevance-ranked text query.
/// - `POST /add_sample_data` seeds the collection with the demo corpus.
///
/// Cross-origin callers are accepted on every route, and each request is
/// traced for diagnostics.
pub fn app(store: Arc<dyn TextSearchStore>) -> Router {
    Router::new()
        .route("/", get(ui::page))
        .route("/search", post(handle_search))
        .route("/add_sample_data", post(handle_add_sample_data))
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use mongodb::bson::Document;
    use tower::ServiceExt;

    use super::app;
    use crate::storage::TextSearchStore;

    /// Store double with no data and no failures.
    struct NullStore;

    #[async_trait]
    impl TextSearchStore for NullStore {
        async fn text_search(&self, _query: &str, _limit: i64) -> Result<Vec<Document>> {
            Ok(Vec::new())
        }

        async fn ensure_text_index(&self, _fields: &[&str]) -> Result<()> {
            Ok(())
        }

        async fn insert_documents(&self, documents: Vec<Document>) -> Result<usize> {
            Ok(documents.len())
        }
    }

    #[tokio::test]
    async fn test_root_serves_the_console() {
        let app = app(Arc::new(NullStore));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let markup = String::from_utf8(body.to_vec()).unwrap();
        assert!(markup.contains("Search Application"));
    }

    #[tokio::test]
    async fn test_cross_origin_search_is_allowed() {
        let app = app(Arc::new(NullStore));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"query": "mongodb"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_preflight_is_answered_on_api_routes() {
        let app = app(Arc::new(NullStore));

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/add_sample_data")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
