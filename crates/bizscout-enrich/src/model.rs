use async_trait::async_trait;

use crate::error::EnrichError;

/// A language model reduced to "prompt in, text out".
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generates a completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError`] on transport failure, a non-success status, or
    /// an empty reply.
    async fn generate(&self, prompt: &str) -> Result<String, EnrichError>;
}
