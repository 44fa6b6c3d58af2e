//! The generation session orchestrator.

use std::sync::Arc;

use flowgen_render::{DiagramId, DiagramRenderer};
use flowgen_view::{DisplayRegion, html};

use crate::error::{FailureCause, GenerateError};
use crate::source::SyntaxSource;

/// Terminal state reached by a single [`Session::generate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The renderer's markup was written to the display region.
    Rendered,
    /// The service returned no diagram description; the empty notice was
    /// written. A normal outcome, not a failure.
    Empty,
    /// The attempt failed; the error presentation was written.
    Failed,
}

/// Orchestrates one generation round-trip per [`generate`](Self::generate)
/// call.
///
/// All observable effects are writes to the shared [`DisplayRegion`].
/// Overlapping calls (from clones sharing a region) interleave freely and
/// the last completion wins; there is no fencing and no cancellation.
pub struct Session {
    source: Arc<dyn SyntaxSource>,
    renderer: Arc<dyn DiagramRenderer>,
    region: DisplayRegion,
}

impl Session {
    /// Create a session over a syntax source, a renderer, and the display
    /// region it updates.
    #[must_use]
    pub fn new(
        source: Arc<dyn SyntaxSource>,
        renderer: Arc<dyn DiagramRenderer>,
        region: DisplayRegion,
    ) -> Self {
        Self {
            source,
            renderer,
            region,
        }
    }

    /// The display region this session writes to.
    #[must_use]
    pub fn region(&self) -> &DisplayRegion {
        &self.region
    }

    /// Run one generation attempt for the given source text.
    ///
    /// Sets the working placeholder synchronously before any network
    /// activity, then leaves the region in exactly one terminal state:
    /// rendered markup, the empty notice, or the error presentation.
    pub fn generate(&self, code: &str) -> Outcome {
        self.region.set_html(html::working_placeholder());

        match self.run(code) {
            Ok(Some(markup)) => {
                self.region.set_html(markup);
                Outcome::Rendered
            }
            Ok(None) => {
                self.region.set_html(html::empty_notice());
                Outcome::Empty
            }
            Err(err) => {
                tracing::error!(cause = %err.cause(), "flowchart generation failed");
                self.region.set_html(html::error_figure(&err.to_string()));
                Outcome::Failed
            }
        }
    }

    /// The fallible part of an attempt: fetch, inspect, render.
    ///
    /// `Ok(None)` is the valid-but-empty outcome.
    fn run(&self, code: &str) -> Result<Option<String>, GenerateError> {
        let response = self.source.fetch(code).map_err(FailureCause::from)?;

        let Some(syntax) = response.syntax() else {
            return Ok(None);
        };

        let id = DiagramId::fresh();
        tracing::debug!(id = %id, "submitting diagram description to renderer");

        let handle = self
            .renderer
            .submit(&id, syntax)
            .map_err(FailureCause::from)?;
        let markup = handle.wait().map_err(FailureCause::from)?;

        Ok(Some(markup))
    }
}
