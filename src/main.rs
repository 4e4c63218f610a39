mod analyze;
mod config;
mod detect;
mod error;
mod google;
mod handlers;
mod routes;
mod state;
mod summarize;
mod translate;
mod tts;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polyglot_gateway=debug,tower_http=debug".into()),
        )
        .init();

    // Load configuration - CONFIG_PATH first, then the conventional name.
    // A missing file is fine; everything has a default and secrets come
    // from the environment anyway.
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    let mut config = config.unwrap_or_else(|| {
        info!("No config file found, using defaults");
        Config::default()
    });
    config.apply_env_overrides();

    // Initialize app state - one client handle per external capability,
    // shared for the process lifetime.
    let app_state = AppState::new(&config);

    // Build application
    let app = routes::create_router(app_state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        config.system_config.host, config.system_config.port
    )
    .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
