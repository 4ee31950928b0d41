use std::env;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::app::RetryPolicy;

/// Which translation backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationProvider {
    /// Keyless Google Translate web endpoint
    GoogleWeb,
    /// Google Cloud Translation v2 (needs an API key)
    GoogleCloud,
    /// Return words untranslated
    Passthrough,
}

impl FromStr for TranslationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google-web" | "google" => Ok(Self::GoogleWeb),
            "google-cloud" => Ok(Self::GoogleCloud),
            "none" | "passthrough" => Ok(Self::Passthrough),
            other => Err(format!("unknown translation provider '{}'", other)),
        }
    }
}

/// Origins allowed to call the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse `*` or a comma-separated list of origins
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|o| o.trim().trim_end_matches('/'))
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }

    /// Build the CORS layer.
    ///
    /// Any-origin mode cannot carry credentials, so it allows any method and
    /// header. An explicit list allows credentials and mirrors the request's
    /// method and headers.
    pub fn cors_layer(&self) -> CorsLayer {
        match self {
            AllowedOrigins::Any => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            AllowedOrigins::List(origins) => {
                let values: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|o| match HeaderValue::from_str(o) {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                            None
                        }
                    })
                    .collect();

                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(values))
                    .allow_methods(AllowMethods::mirror_request())
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true)
            }
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    pub translation_provider: TranslationProvider,
    /// Override for the provider's endpoint
    pub translate_base_url: Option<String>,
    /// API key for Google Cloud Translation
    pub google_api_key: Option<String>,
    pub retry_policy: RetryPolicy,
    /// Per-request timeout for the translation HTTP client
    pub translate_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = RetryPolicy::default();

        Self {
            port: parse_var("PORT", 8080),
            allowed_origins: AllowedOrigins::parse(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            translation_provider: parse_var("TRANSLATION_PROVIDER", TranslationProvider::GoogleWeb),
            translate_base_url: non_empty_var("TRANSLATE_BASE_URL"),
            google_api_key: non_empty_var("GOOGLE_TRANSLATE_API_KEY"),
            retry_policy: RetryPolicy {
                max_attempts: parse_var("TRANSLATE_MAX_ATTEMPTS", defaults.max_attempts).max(1),
                delay: Duration::from_millis(parse_var(
                    "TRANSLATE_RETRY_DELAY_MS",
                    defaults.delay.as_millis() as u64,
                )),
            },
            translate_timeout: Duration::from_secs(parse_var("TRANSLATE_TIMEOUT_SECS", 10)),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse an env var, keeping `default` when unset or invalid
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = raw, error = %e, "Invalid config value, using default");
            default
        }
    }
}
