use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::interface::{Language, Translator};
use crate::error::ServiceError;
use crate::google::error_message;

/// Google Translate v2 REST client.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    data: LanguagesData,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Vec<Language>,
}

impl GoogleTranslator {
    pub fn new(client: Client, endpoint: String, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ServiceError> {
        let url = format!("{}/language/translate/v2", self.endpoint);
        let body = json!({
            "q": text,
            "target": target_language,
            "format": "text",
        });

        debug!(target_language, "requesting translation");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Translation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Translation(error_message(response).await));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Translation(e.to_string()))?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| ServiceError::Translation("empty translation response".to_string()))
    }

    async fn supported_languages(&self) -> Result<Vec<Language>, ServiceError> {
        let url = format!("{}/language/translate/v2/languages", self.endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("target", "en")])
            .send()
            .await
            .map_err(|e| ServiceError::Translation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Translation(error_message(response).await));
        }

        let parsed: LanguagesResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Translation(e.to_string()))?;

        Ok(parsed.data.languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn translator(server: &MockServer) -> GoogleTranslator {
        GoogleTranslator::new(Client::new(), server.uri(), "test-key".to_string())
    }

    #[tokio::test]
    async fn translate_returns_first_translation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/language/translate/v2"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "translations": [ { "translatedText": "Hola" } ] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let translated = translator(&server).translate("Hello", "es").await.unwrap();
        assert_eq!(translated, "Hola");
    }

    #[tokio::test]
    async fn api_error_message_is_forwarded_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/language/translate/v2"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "Invalid Value", "status": "INVALID_ARGUMENT" }
            })))
            .mount(&server)
            .await;

        let err = translator(&server).translate("Hello", "xx").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid Value");
    }

    #[tokio::test]
    async fn supported_languages_parses_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/language/translate/v2/languages"))
            .and(query_param("target", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "languages": [
                    { "language": "en", "name": "English" },
                    { "language": "es", "name": "Spanish" }
                ] }
            })))
            .mount(&server)
            .await;

        let languages = translator(&server).supported_languages().await.unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].language, "en");
        assert_eq!(languages[1].name, "Spanish");
    }
}
