use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Language detection
        .route("/detect_language", post(handlers::detect_language))
        .route("/detect_languages", post(handlers::detect_languages))
        .route("/detect_language_file", post(handlers::detect_language_file))
        // Translation
        .route("/translate_text", post(handlers::translate_text))
        .route("/translate_texts", post(handlers::translate_texts))
        .route("/auto_translate", post(handlers::auto_translate))
        .route("/supported_languages", get(handlers::supported_languages))
        // Speech synthesis
        .route("/text_to_speech", post(handlers::text_to_speech))
        // Text analysis
        .route("/text_summary", post(handlers::text_summary))
        .route("/sentiment_analysis", post(handlers::sentiment_analysis))
        .route("/custom_language_model", post(handlers::custom_language_model))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
