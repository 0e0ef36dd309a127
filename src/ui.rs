//! Browser Frontend
//!
//! Serves the search console embedded in the binary: a query box wired to
//! the search endpoint, with result and error rendering.

use axum::response::Html;

/// Serves the embedded search page.
pub async fn page() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}
