use axum::extract::{Multipart, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::error::GatewayError;
use crate::state::AppState;

/// Per-item result for the batch endpoints: either the plain success
/// string or an `{error}` object, so one failing item never fails its
/// siblings.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ItemOutcome {
    Success(String),
    Failure { error: String },
}

fn require_str<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload.get(field).and_then(Value::as_str)
}

fn require_str_array(payload: &Value, field: &str) -> Option<Vec<String>> {
    payload
        .get(field)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

fn missing(what: &str) -> GatewayError {
    GatewayError::invalid(format!("Invalid input, {}", what))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let summarizer_healthy = state.summarizer.health_check().await;
    Json(json!({
        "status": "ok",
        "summarizer": summarizer_healthy,
    }))
}

pub async fn detect_language(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let text = require_str(&payload, "text").ok_or_else(|| missing("\"text\" is required"))?;

    let language = state.identifier.detect(text).await?;
    Ok(Json(json!({ "language": language })))
}

pub async fn detect_languages(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let texts = require_str_array(&payload, "texts").ok_or_else(|| missing("\"texts\" is required"))?;

    let mut results = Map::new();
    for text in texts {
        let outcome = match state.identifier.detect(&text).await {
            Ok(language) => ItemOutcome::Success(language),
            Err(e) => ItemOutcome::Failure {
                error: e.to_string(),
            },
        };
        results.insert(text, json!(outcome));
    }

    Ok(Json(Value::Object(results)))
}

pub async fn translate_text(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let (text, target_language) = match (
        require_str(&payload, "text"),
        require_str(&payload, "target_language"),
    ) {
        (Some(text), Some(target)) => (text, target),
        _ => return Err(missing("\"text\" and \"target_language\" are required")),
    };

    let translated = state.translator.translate(text, target_language).await?;
    Ok(Json(json!({ "translated_text": translated })))
}

pub async fn translate_texts(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let text = require_str(&payload, "text");
    let target_languages = require_str_array(&payload, "target_languages");
    let (text, target_languages) = match (text, target_languages) {
        (Some(text), Some(langs)) => (text, langs),
        _ => return Err(missing("\"text\" and \"target_languages\" are required")),
    };

    let mut translations = Map::new();
    for lang in target_languages {
        let outcome = match state.translator.translate(text, &lang).await {
            Ok(translated) => ItemOutcome::Success(translated),
            Err(e) => ItemOutcome::Failure {
                error: e.to_string(),
            },
        };
        translations.insert(lang, json!(outcome));
    }

    Ok(Json(Value::Object(translations)))
}

pub async fn detect_language_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::invalid(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        if field.file_name().map_or(true, str::is_empty) {
            return Err(GatewayError::invalid("No selected file"));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| GatewayError::invalid(e.to_string()))?;
        let text = String::from_utf8(data.to_vec())
            .map_err(|_| GatewayError::invalid("File content is not valid UTF-8"))?;

        let language = state.identifier.detect(&text).await?;
        return Ok(Json(json!({ "language": language })));
    }

    Err(GatewayError::invalid("No file part"))
}

pub async fn auto_translate(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let (text, target_language) = match (
        require_str(&payload, "text"),
        require_str(&payload, "target_language"),
    ) {
        (Some(text), Some(target)) => (text, target),
        _ => return Err(missing("\"text\" and \"target_language\" are required")),
    };

    let detected_language = state.identifier.detect(text).await?;

    // Same language: skip the translator entirely.
    if detected_language == target_language {
        return Ok(Json(json!({ "translated_text": text })));
    }

    let translated = state.translator.translate(text, target_language).await?;
    Ok(Json(json!({
        "detected_language": detected_language,
        "translated_text": translated,
    })))
}

pub async fn supported_languages(
    State(state): State<AppState>,
) -> Result<Json<Value>, GatewayError> {
    let languages = state.translator.supported_languages().await?;
    Ok(Json(json!({ "languages": languages })))
}

pub async fn text_to_speech(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let (text, language_code) = match (
        require_str(&payload, "text"),
        require_str(&payload, "language_code"),
    ) {
        (Some(text), Some(code)) => (text, code),
        _ => return Err(missing("\"text\" and \"language_code\" are required")),
    };

    let audio = state.synthesizer.synthesize(text, language_code).await?;
    info!(bytes = audio.len(), "synthesized speech");

    Ok(Json(json!({ "audio_content": BASE64.encode(&audio) })))
}

pub async fn text_summary(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let text = require_str(&payload, "text").ok_or_else(|| missing("\"text\" is required"))?;

    let summary = state.summarizer.summarize(text).await?;
    Ok(Json(json!({ "summary": summary })))
}

pub async fn sentiment_analysis(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let text = require_str(&payload, "text").ok_or_else(|| missing("\"text\" is required"))?;

    let sentiment = state.analyzer.analyze_sentiment(text).await?;
    Ok(Json(json!({
        "score": sentiment.score,
        "magnitude": sentiment.magnitude,
    })))
}

pub async fn custom_language_model(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let (text, model_name) = match (
        require_str(&payload, "text"),
        require_str(&payload, "model_name"),
    ) {
        (Some(text), Some(model)) => (text, model),
        _ => return Err(missing("\"text\" and \"model_name\" are required")),
    };

    let categories = state.analyzer.classify(text, model_name).await?;
    Ok(Json(json!({ "categories": categories })))
}
