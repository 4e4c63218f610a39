use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::interface::SpeechSynthesizer;
use crate::error::ServiceError;
use crate::google::error_message;

/// Google Cloud Text-to-Speech v1 REST client.
#[derive(Debug, Clone)]
pub struct GoogleSynthesizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

impl GoogleSynthesizer {
    pub fn new(client: Client, endpoint: String, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSynthesizer {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, ServiceError> {
        let url = format!("{}/v1/text:synthesize", self.endpoint);
        let body = json!({
            "input": { "text": text },
            "voice": {
                "languageCode": language_code,
                "ssmlGender": "NEUTRAL",
            },
            "audioConfig": { "audioEncoding": "MP3" },
        });

        debug!(language_code, "requesting speech synthesis");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Synthesis(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Synthesis(error_message(response).await));
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Synthesis(e.to_string()))?;

        BASE64
            .decode(parsed.audio_content.as_bytes())
            .map_err(|e| ServiceError::Synthesis(format!("invalid audio payload: {}", e)))
    }
}
