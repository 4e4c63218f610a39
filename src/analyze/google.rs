use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::interface::{Category, Sentiment, TextAnalyzer};
use crate::error::ServiceError;
use crate::google::error_message;

/// Google Cloud Natural Language v1 REST client.
#[derive(Debug, Clone)]
pub struct GoogleAnalyzer {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SentimentResponse {
    #[serde(rename = "documentSentiment")]
    document_sentiment: Sentiment,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    categories: Vec<Category>,
}

impl GoogleAnalyzer {
    pub fn new(client: Client, endpoint: String, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    fn document(text: &str) -> serde_json::Value {
        json!({ "type": "PLAIN_TEXT", "content": text })
    }
}

#[async_trait]
impl TextAnalyzer for GoogleAnalyzer {
    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, ServiceError> {
        let url = format!("{}/v1/documents:analyzeSentiment", self.endpoint);
        let body = json!({ "document": Self::document(text) });

        debug!("requesting sentiment analysis");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Analysis(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Analysis(error_message(response).await));
        }

        let parsed: SentimentResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Analysis(e.to_string()))?;

        Ok(parsed.document_sentiment)
    }

    async fn classify(&self, text: &str, model_name: &str) -> Result<Vec<Category>, ServiceError> {
        let url = format!("{}/v1/documents:classifyText", self.endpoint);
        let body = json!({
            "document": Self::document(text),
            "classifierId": model_name,
        });

        debug!(model_name, "requesting text classification");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Classification(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Classification(error_message(response).await));
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Classification(e.to_string()))?;

        Ok(parsed.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn analyzer(server: &MockServer) -> GoogleAnalyzer {
        GoogleAnalyzer::new(Client::new(), server.uri(), "test-key".to_string())
    }

    #[tokio::test]
    async fn sentiment_parses_document_sentiment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/documents:analyzeSentiment"))
            .and(body_partial_json(json!({
                "document": { "type": "PLAIN_TEXT", "content": "I love this" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "documentSentiment": { "score": 0.8, "magnitude": 1.6 },
                "language": "en",
            })))
            .mount(&server)
            .await;

        let sentiment = analyzer(&server).analyze_sentiment("I love this").await.unwrap();
        assert_eq!(sentiment.score, 0.8);
        assert_eq!(sentiment.magnitude, 1.6);
    }

    #[tokio::test]
    async fn classify_preserves_category_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/documents:classifyText"))
            .and(body_partial_json(json!({ "classifierId": "news-model" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "categories": [
                    { "name": "/News", "confidence": 0.92 },
                    { "name": "/News/Politics", "confidence": 0.71 }
                ]
            })))
            .mount(&server)
            .await;

        let categories = analyzer(&server)
            .classify("Some article text", "news-model")
            .await
            .unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "/News");
        assert_eq!(categories[1].name, "/News/Politics");
    }

    #[tokio::test]
    async fn unknown_classifier_surfaces_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/documents:classifyText"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "code": 404, "message": "Classifier not found", "status": "NOT_FOUND" }
            })))
            .mount(&server)
            .await;

        let err = analyzer(&server)
            .classify("text", "missing-model")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Classification(_)));
        assert_eq!(err.to_string(), "Classifier not found");
    }
}
