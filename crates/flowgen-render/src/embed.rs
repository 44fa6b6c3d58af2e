//! Client-side mermaid.js embed renderer.

use flowgen_view::escape_html;

use crate::handle::RenderHandle;
use crate::ids::DiagramId;
use crate::renderer::{DiagramRenderer, RenderError};

/// Renderer that defers drawing to mermaid.js in the page.
///
/// Emits a `<pre class="mermaid">` element carrying the escaped diagram
/// description; the page's mermaid runtime picks it up and replaces it with
/// SVG. Completes immediately, so `wait()` never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbedRenderer;

impl EmbedRenderer {
    /// Create an embed renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagramRenderer for EmbedRenderer {
    fn submit(&self, id: &DiagramId, description: &str) -> Result<RenderHandle, RenderError> {
        if description.trim().is_empty() {
            return Err(RenderError::new("empty diagram description"));
        }

        tracing::debug!(id = %id, "embedding diagram for client-side rendering");

        let markup = format!(
            r#"<pre class="mermaid" id="{id}">{}</pre>"#,
            escape_html(description)
        );
        Ok(RenderHandle::ready(markup))
    }
}
