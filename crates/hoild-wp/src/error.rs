//! Error types for WordPress API access.

/// Error from WordPress REST API operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WpError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] reqwest::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} for {url}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// JSON deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
