use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client request for the search endpoint.
///
/// `query` may be absent or `null`; both are treated as the empty string,
/// so all three take the same validation path.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Successful search payload: the matched documents in the store's
/// descending-relevance order, reshaped for transport.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Value>,
}

impl SearchResponse {
    /// Reshapes raw store documents for transport, preserving their order.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let results = documents.into_iter().map(into_transport_value).collect();
        Self { results }
    }
}

/// Converts one stored document into its response form.
///
/// The `_id` ObjectId is replaced with its hex string, since the native
/// token has no direct JSON form. Every other field, including the
/// engine-assigned `score`, passes through untouched.
fn into_transport_value(mut document: Document) -> Value {
    if let Ok(id) = document.get_object_id("_id") {
        document.insert("_id", id.to_hex());
    }

    Bson::Document(document).into_relaxed_extjson()
}
