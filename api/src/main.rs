//! Hanpass API Server
//!
//! Turns two English words and a symbol into a password typed as their
//! Korean translation on a 2-beolsik keyboard.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    GoogleCloudTranslator, GoogleWebTranslator, PassthroughTranslator, ThreadRngIndexSource,
    DEFAULT_CLOUD_BASE_URL, DEFAULT_WEB_BASE_URL,
};
use app::PasswordService;
use config::{Config, TranslationProvider};
use domain::ports::Translator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub password_service: Arc<PasswordService<dyn Translator>>,
}

/// Build the router with CORS and request tracing
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health check
        .route("/", get(handlers::health))
        .route("/generate", post(handlers::generate))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the translator selected by configuration
fn create_translator(config: &Config) -> anyhow::Result<Arc<dyn Translator>> {
    let web = |config: &Config| -> anyhow::Result<Arc<dyn Translator>> {
        let base_url = config
            .translate_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_WEB_BASE_URL.to_string());
        tracing::info!(%base_url, "Using Google web translator");
        Ok(Arc::new(GoogleWebTranslator::new(
            base_url,
            config.translate_timeout,
        )?))
    };

    match config.translation_provider {
        TranslationProvider::GoogleWeb => web(config),
        TranslationProvider::GoogleCloud => match &config.google_api_key {
            Some(api_key) => {
                let base_url = config
                    .translate_base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CLOUD_BASE_URL.to_string());
                tracing::info!(%base_url, "Using Google Cloud translator");
                Ok(Arc::new(GoogleCloudTranslator::new(
                    base_url,
                    api_key.clone(),
                    config.translate_timeout,
                )?))
            }
            None => {
                tracing::warn!(
                    "GOOGLE_TRANSLATE_API_KEY not set, falling back to Google web translator"
                );
                web(config)
            }
        },
        TranslationProvider::Passthrough => {
            tracing::info!("Translation disabled, words pass through untranslated");
            Ok(Arc::new(PassthroughTranslator))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hanpass_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hanpass API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let translator = create_translator(&config)?;
    let index_source = Arc::new(ThreadRngIndexSource);

    // Create application services
    let password_service = Arc::new(PasswordService::new(
        translator,
        config.retry_policy,
        index_source,
    ));

    let state = AppState { password_service };

    tracing::info!(origins = ?config.allowed_origins, "CORS configured");
    let app = build_router(state, config.allowed_origins.cors_layer());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
