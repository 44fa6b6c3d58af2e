//! The renderer trait and its error type.

use crate::handle::RenderHandle;
use crate::ids::DiagramId;

/// Rendering failure reported by a renderer, up front or via completion.
#[derive(Debug, Clone, thiserror::Error)]
#[error("rendering failed: {0}")]
pub struct RenderError(String);

impl RenderError {
    /// Create a render error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Capability that turns a diagram description into displayable markup.
///
/// `submit` registers the render and returns immediately; the markup lands
/// later through the returned [`RenderHandle`]. A renderer that detects a
/// malformed description synchronously may reject it from `submit` instead.
pub trait DiagramRenderer: Send + Sync {
    /// Start rendering `description` under the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the description is rejected up front.
    fn submit(&self, id: &DiagramId, description: &str) -> Result<RenderHandle, RenderError>;
}
