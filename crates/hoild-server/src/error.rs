//! Server error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No entity matched the requested slug.
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(slug) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "not_found", "slug": slug })),
            )
                .into_response(),
        }
    }
}
