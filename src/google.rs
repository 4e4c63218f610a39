//! Shared plumbing for the Google REST surfaces.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: String,
}

/// Pull the human-readable message out of a failed Google response so it
/// can be forwarded to the caller verbatim. Falls back to the raw body
/// when the error shape is unexpected.
pub(crate) async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<GoogleErrorBody>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => format!("google api error ({}): {}", status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_error_shape() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#;
        let parsed: GoogleErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }
}
