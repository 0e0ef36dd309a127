//! API Error Types
//!
//! Two failure kinds cover the whole service: a client-side validation
//! failure and an upstream store failure. Each renders its own HTTP status
//! and JSON body; there is no retry or partial-failure handling, so every
//! error is terminal for its request.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller supplied an empty or missing query. Recovered locally and
    /// reported as a 400 with an empty result list and an explanatory
    /// message.
    #[error("{0}")]
    Validation(String),

    /// The document store failed (unreachable, malformed search syntax,
    /// missing index). Reported as a 500 carrying the failure text, and
    /// echoed to the operator log.
    #[error("{0}")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "results": [], "message": message })),
            )
                .into_response(),
            ApiError::Upstream(err) => {
                tracing::error!("Store operation failed: {:#}", err);
                // Alternate format renders the full chain, not just the
                // outermost context.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("{:#}", err) })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    }

    #[tokio::test]
    async fn test_validation_renders_400_with_empty_results() {
        let response = ApiError::Validation("Query is empty".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["results"], json!([]));
        assert_eq!(body["message"], "Query is empty");
    }

    #[tokio::test]
    async fn test_upstream_renders_500_with_failure_text() {
        let err = anyhow::anyhow!("connection refused");
        let response = ApiError::Upstream(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "connection refused");
    }

    #[tokio::test]
    async fn test_upstream_keeps_cause_text_when_wrapped() {
        let err = anyhow::anyhow!("text index required for $text query")
            .context("query dispatch failed");
        let response = ApiError::Upstream(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        let text = body["error"].as_str().unwrap();
        assert!(text.contains("text index required for $text query"));
        assert!(text.contains("query dispatch failed"));
    }
}
