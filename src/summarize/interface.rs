use async_trait::async_trait;

use crate::error::ServiceError;

/// Summarizer seam - long text in, shorter text out.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, ServiceError>;

    /// Reachability probe for the liveness endpoint.
    async fn health_check(&self) -> bool {
        true
    }
}
