//! Google translation adapters
//!
//! Implementations of the translator port for Google's web endpoint and
//! the Cloud Translation API.

pub mod cloud_client;
pub mod web_client;

pub use cloud_client::{GoogleCloudTranslator, DEFAULT_CLOUD_BASE_URL};
pub use web_client::{GoogleWebTranslator, DEFAULT_WEB_BASE_URL};

use serde::Deserialize;

use crate::error::TranslationError;

/// Map a provider response to a body or a [`TranslationError`]
async fn handle_response<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, TranslationError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| TranslationError::Deserialization(e.to_string()))
    } else if status.as_u16() == 401 || status.as_u16() == 403 {
        Err(TranslationError::Unauthorized)
    } else if status.as_u16() == 429 {
        Err(TranslationError::RateLimited)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(TranslationError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
