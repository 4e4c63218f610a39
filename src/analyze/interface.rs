use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Document-level sentiment. Score is in [-1, 1]; magnitude is the total
/// emotional weight and is non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sentiment {
    // Google omits zero-valued fields in its JSON encoding. f64 so the
    // values relay through JSON unmodified.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub magnitude: f64,
}

/// One classification category with its confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
}

/// Text analyzer seam - sentiment scoring and named-classifier
/// categorization.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, ServiceError>;

    /// Classify `text` with the named classifier, preserving the order the
    /// classifier returns.
    async fn classify(&self, text: &str, model_name: &str) -> Result<Vec<Category>, ServiceError>;
}
