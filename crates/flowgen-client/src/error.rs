//! Error types for the generation client.

/// Error from a single generation request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport failed (connection refused, timeout, TLS, etc).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// Server answered with a non-success status. The raw body text is
    /// preserved so the caller can fold it into its error message.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body text (may contain error details).
        body: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}
