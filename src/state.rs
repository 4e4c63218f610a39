use std::sync::Arc;

use reqwest::Client;

use crate::analyze::{GoogleAnalyzer, TextAnalyzer};
use crate::config::Config;
use crate::detect::{LanguageIdentifier, WhatlangIdentifier};
use crate::summarize::{Summarizer, SummarizerClient};
use crate::translate::{GoogleTranslator, Translator};
use crate::tts::{GoogleSynthesizer, SpeechSynthesizer};

/// Shared application state.
///
/// Every capability handle is built once at startup and shared across
/// request handlers for the life of the process; handlers never mutate
/// them.
#[derive(Clone)]
pub struct AppState {
    pub identifier: Arc<dyn LanguageIdentifier>,
    pub translator: Arc<dyn Translator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub analyzer: Arc<dyn TextAnalyzer>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http = Client::new();
        let google = &config.google;

        let translator = Arc::new(GoogleTranslator::new(
            http.clone(),
            google.translate_endpoint.clone(),
            google.api_key.clone(),
        ));
        let synthesizer = Arc::new(GoogleSynthesizer::new(
            http.clone(),
            google.tts_endpoint.clone(),
            google.api_key.clone(),
        ));
        let analyzer = Arc::new(GoogleAnalyzer::new(
            http.clone(),
            google.language_endpoint.clone(),
            google.api_key.clone(),
        ));
        let summarizer = Arc::new(SummarizerClient::new(
            http,
            config.summarizer.base_url.clone(),
        ));

        Self {
            identifier: Arc::new(WhatlangIdentifier::new()),
            translator,
            synthesizer,
            analyzer,
            summarizer,
        }
    }
}
