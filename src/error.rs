use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failure of one external capability call. The message carries whatever
/// the upstream service reported, unmodified.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Detection(String),
    #[error("{0}")]
    Translation(String),
    #[error("{0}")]
    Synthesis(String),
    #[error("{0}")]
    Analysis(String),
    #[error("{0}")]
    Classification(String),
    #[error("{0}")]
    Summarization(String),
}

/// Top-level handler error: either the request was malformed (no external
/// call attempted) or an external call failed.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl GatewayError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("external call failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let err = GatewayError::invalid("\"text\" is required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn service_failure_maps_to_500_with_verbatim_message() {
        let err = GatewayError::from(ServiceError::Translation("quota exceeded".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
