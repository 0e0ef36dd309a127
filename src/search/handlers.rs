use axum::{Extension, Json};
use std::sync::Arc;

use super::types::{SearchRequest, SearchResponse};
use crate::error::ApiError;
use crate::storage::TextSearchStore;

/// Maximum number of matches returned per query.
pub const RESULT_LIMIT: i64 = 20;

pub async fn handle_search(
    Extension(store): Extension<Arc<dyn TextSearchStore>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    // Only the truly empty string is rejected. Whitespace-only queries go
    // to the store, which tokenizes them to nothing and matches nothing.
    let query = request.query.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::Validation("Query is empty".to_string()));
    }

    let documents = store.text_search(&query, RESULT_LIMIT).await?;

    Ok(Json(SearchResponse::from_documents(documents)))
}
