//! Uniform error collapse for generation attempts.

use flowgen_client::ClientError;
use flowgen_render::RenderError;

/// The single externally visible failure kind for a generation attempt.
///
/// Its display string is the human-readable message shown in the error
/// presentation; the wrapped [`FailureCause`] stays available for logs.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct GenerateError {
    cause: FailureCause,
}

impl GenerateError {
    /// The underlying cause, for diagnostics only.
    #[must_use]
    pub fn cause(&self) -> &FailureCause {
        &self.cause
    }
}

impl From<FailureCause> for GenerateError {
    fn from(cause: FailureCause) -> Self {
        Self { cause }
    }
}

/// Why a generation attempt failed.
///
/// Never distinguished at the presentation layer; the UI renders the
/// generic form regardless of the variant.
#[derive(Debug, thiserror::Error)]
pub enum FailureCause {
    /// The request never completed (network failure, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status; the raw body text
    /// is part of the message.
    #[error("server returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The success response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Parse(String),

    /// The rendering capability rejected or failed the description.
    #[error("{0}")]
    Render(#[from] RenderError),
}

impl From<ClientError> for FailureCause {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport(e) => Self::Transport(e.to_string()),
            ClientError::HttpStatus { status, body } => Self::HttpStatus { status, body },
            ClientError::Json(e) => Self::Parse(e.to_string()),
        }
    }
}
