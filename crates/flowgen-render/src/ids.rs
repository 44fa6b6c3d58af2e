//! Ephemeral diagram identifiers.

use std::fmt;

use uuid::Uuid;

/// Identifier for a single render call.
///
/// Fresh per invocation and unique within the session; no persistence, no
/// reuse, no lifecycle beyond the render call it namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagramId(String);

impl DiagramId {
    /// Generate a fresh identifier, distinct from every previous one.
    #[must_use]
    pub fn fresh() -> Self {
        Self(format!("flowchart-{}", Uuid::new_v4().simple()))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
