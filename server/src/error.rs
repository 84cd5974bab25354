//! Error type for the HTTP surface.
//!
//! # Design
//! The only failure this service models is "the id does not exist" — it
//! gets a dedicated type so every id-scoped handler maps absence to the
//! same empty 404. Everything else (malformed JSON, non-numeric path ids,
//! panics in the store) is left to axum's built-in rejections and the
//! hosting layer's default fault handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures a handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The id-scoped operation referenced a nonexistent record.
    #[error("resource not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
