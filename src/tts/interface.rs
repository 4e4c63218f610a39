use async_trait::async_trait;

use crate::error::ServiceError;

/// Speech synthesizer seam.
///
/// Voice gender and audio codec are fixed by the implementation (neutral
/// voice, MP3); callers only choose text and language.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in the voice for `language_code`, returning raw
    /// audio bytes.
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, ServiceError>;
}
