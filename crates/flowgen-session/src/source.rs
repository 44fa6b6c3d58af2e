//! Seam over the generation endpoint.

use flowgen_client::{ClientError, GenerateResponse, GeneratorClient};

/// Source of diagram descriptions for user source text.
///
/// Abstracts the generation endpoint so sessions can be exercised without a
/// live server; the production implementation is [`GeneratorClient`].
pub trait SyntaxSource: Send + Sync {
    /// Convert source text into a generation response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the round-trip fails at any stage.
    fn fetch(&self, code: &str) -> Result<GenerateResponse, ClientError>;
}

impl SyntaxSource for GeneratorClient {
    fn fetch(&self, code: &str) -> Result<GenerateResponse, ClientError> {
        self.generate(code)
    }
}
