//! Search Service Module
//!
//! The component that answers user queries against the store's text index.
//!
//! ## Overview
//! This module is the request/response mapping layer between the HTTP API
//! and MongoDB's text-search engine. It owns no retrieval logic of its own:
//! tokenization, index lookup, and relevance scoring all happen inside the
//! store.
//!
//! ## Responsibilities
//! - **Validation**: Rejecting empty, missing, or null queries before they
//!   reach the store.
//! - **Delegation**: Requesting the top matches ordered by descending
//!   relevance score.
//! - **Reshaping**: Converting opaque document identifiers to display
//!   strings and carrying the engine's score into the payload.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod types;
