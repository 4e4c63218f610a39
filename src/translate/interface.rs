use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// One entry from the translator's supported-language listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub name: String,
}

/// Translator seam - text plus a target code in, translated text out.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ServiceError>;

    /// Full list of language codes/names the translator knows.
    async fn supported_languages(&self) -> Result<Vec<Language>, ServiceError>;
}
