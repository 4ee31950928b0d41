//! Google Cloud Translation (v2) client
//!
//! Authenticated with an API key passed as a query parameter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use super::handle_response;
use crate::domain::ports::{Language, Translator};
use crate::error::TranslationError;

pub const DEFAULT_CLOUD_BASE_URL: &str = "https://translation.googleapis.com";

/// Translator backed by the Cloud Translation v2 REST API
pub struct GoogleCloudTranslator {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GoogleCloudTranslator {
    pub fn new(
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, TranslationError> {
        if api_key.trim().is_empty() {
            return Err(TranslationError::Configuration(
                "Cloud Translation requires an API key".to_string(),
            ));
        }

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/language/translate/v2?key={}",
            self.base_url,
            encode(&self.api_key)
        )
    }
}

/// Request types for the Cloud Translation API
#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<TranslatedText>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

#[async_trait]
impl Translator for GoogleCloudTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslationError> {
        let response = self
            .http
            .post(self.api_url())
            .json(&TranslateRequest {
                q: text,
                source: source.code(),
                target: target.code(),
                format: "text",
            })
            .send()
            .await?;

        let body: TranslateResponse = handle_response(response).await?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslationError::Deserialization("no translations returned".to_string()))
    }
}
