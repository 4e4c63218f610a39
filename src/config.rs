use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// API key for the Google REST surfaces. Usually left empty here and
    /// supplied through the GOOGLE_API_KEY environment variable instead.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_translate_endpoint")]
    pub translate_endpoint: String,
    #[serde(default = "default_tts_endpoint")]
    pub tts_endpoint: String,
    #[serde(default = "default_language_endpoint")]
    pub language_endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_summarizer_url")]
    pub base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_translate_endpoint() -> String {
    "https://translation.googleapis.com".to_string()
}

fn default_tts_endpoint() -> String {
    "https://texttospeech.googleapis.com".to_string()
}

fn default_language_endpoint() -> String {
    "https://language.googleapis.com".to_string()
}

fn default_summarizer_url() -> String {
    "http://localhost:8000".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }

    /// Environment variables take precedence over the config file for
    /// secrets and service locations.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            self.google.api_key = key;
        }
        if let Ok(url) = std::env::var("SUMMARIZER_URL") {
            self.summarizer.base_url = url;
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            translate_endpoint: default_translate_endpoint(),
            tts_endpoint: default_tts_endpoint(),
            language_endpoint: default_language_endpoint(),
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            base_url: default_summarizer_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_with_partial_fields_fills_defaults() {
        let yaml = "system_config:\n  port: 9090\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 9090);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(
            config.google.translate_endpoint,
            "https://translation.googleapis.com"
        );
        assert_eq!(config.summarizer.base_url, "http://localhost:8000");
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert!(config.google.api_key.is_empty());
    }
}
