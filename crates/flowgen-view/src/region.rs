//! The shared display region.

use std::sync::{Arc, Mutex, PoisonError};

/// Handle to the single display region whose HTML content is fully replaced
/// on every state transition.
///
/// Clones share the same underlying slot. Writes are unconditional: when
/// overlapping generation attempts race, the last completion wins, matching
/// the source design (no request fencing, no cancellation).
#[derive(Clone, Debug, Default)]
pub struct DisplayRegion {
    inner: Arc<Mutex<String>>,
}

impl DisplayRegion {
    /// Create an empty display region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region's content.
    pub fn set_html(&self, html: impl Into<String>) {
        *self.lock() = html.into();
    }

    /// Current content of the region.
    #[must_use]
    pub fn html(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, String> {
        // A writer cannot panic while holding the lock, but recover anyway
        // rather than poisoning every later display update.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
