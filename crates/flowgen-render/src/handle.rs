//! Pending-render handle and its completion side.

use std::sync::mpsc;

use crate::renderer::RenderError;

/// A render in flight, returned by [`DiagramRenderer::submit`].
///
/// [`DiagramRenderer::submit`]: crate::DiagramRenderer::submit
#[derive(Debug)]
pub struct RenderHandle {
    rx: mpsc::Receiver<Result<String, RenderError>>,
}

impl RenderHandle {
    /// Create a pending handle and the completion side the renderer keeps.
    #[must_use]
    pub fn pending() -> (RenderCompletion, Self) {
        let (tx, rx) = mpsc::channel();
        (RenderCompletion { tx }, Self { rx })
    }

    /// A handle that is already complete with the given markup, for
    /// renderers that finish synchronously.
    #[must_use]
    pub fn ready(markup: impl Into<String>) -> Self {
        let (completion, handle) = Self::pending();
        completion.complete(markup);
        handle
    }

    /// Block until the renderer delivers markup or reports failure.
    ///
    /// A completion dropped without responding counts as a failure rather
    /// than leaving the caller without a terminal state.
    pub fn wait(self) -> Result<String, RenderError> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(RenderError::new("renderer dropped without completing")))
    }
}

/// Renderer-side half of a pending render.
///
/// Consuming it delivers exactly one outcome to the waiting handle. Sends
/// are best-effort: the waiter may already be gone, and that is fine.
pub struct RenderCompletion {
    tx: mpsc::Sender<Result<String, RenderError>>,
}

impl RenderCompletion {
    /// Deliver the rendered markup.
    pub fn complete(self, markup: impl Into<String>) {
        let _ = self.tx.send(Ok(markup.into()));
    }

    /// Report that rendering failed.
    pub fn fail(self, error: RenderError) {
        let _ = self.tx.send(Err(error));
    }
}
