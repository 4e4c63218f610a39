use async_trait::async_trait;

use crate::error::ServiceError;

/// Language identifier seam - maps raw text to a language code.
#[async_trait]
pub trait LanguageIdentifier: Send + Sync {
    /// Detect the language of `text` and return its ISO 639-1 code
    /// (falling back to ISO 639-3 where no two-letter code exists).
    async fn detect(&self, text: &str) -> Result<String, ServiceError>;
}
