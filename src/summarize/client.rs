use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::interface::Summarizer;
use crate::error::ServiceError;

/// Client for the summarizer sidecar service.
#[derive(Debug, Clone)]
pub struct SummarizerClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SummarizeResponse {
    summary: String,
    success: bool,
    error: Option<String>,
}

impl SummarizerClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl Summarizer for SummarizerClient {
    async fn summarize(&self, text: &str) -> Result<String, ServiceError> {
        let url = format!("{}/summarize", self.base_url);
        let body = json!({ "text": text });

        debug!(chars = text.len(), "requesting summary");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Summarization(e.to_string()))?;

        let result: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Summarization(e.to_string()))?;

        if result.success {
            Ok(result.summary)
        } else {
            let message = result
                .error
                .unwrap_or_else(|| "summarization failed".to_string());
            Err(ServiceError::Summarization(message))
        }
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn summarize_returns_summary_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": "Short version.",
                "success": true,
                "error": null,
            })))
            .mount(&server)
            .await;

        let summarizer = SummarizerClient::new(Client::new(), server.uri());
        let summary = summarizer.summarize("A very long text.").await.unwrap();
        assert_eq!(summary, "Short version.");
    }

    #[tokio::test]
    async fn sidecar_error_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": "",
                "success": false,
                "error": "model not loaded",
            })))
            .mount(&server)
            .await;

        let summarizer = SummarizerClient::new(Client::new(), server.uri());
        let err = summarizer.summarize("text").await.unwrap_err();
        assert_eq!(err.to_string(), "model not loaded");
    }

    #[tokio::test]
    async fn health_check_reflects_sidecar_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let summarizer = SummarizerClient::new(Client::new(), server.uri());
        assert!(summarizer.health_check().await);
    }
}
