//! Google Translate web endpoint client
//!
//! Uses the keyless `translate_a/single` endpoint. The response is a nested
//! JSON array whose first element lists translated segments.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use urlencoding::encode;

use super::handle_response;
use crate::domain::ports::{Language, Translator};
use crate::error::TranslationError;

pub const DEFAULT_WEB_BASE_URL: &str = "https://translate.googleapis.com";

/// Translator backed by the public Google Translate web endpoint
pub struct GoogleWebTranslator {
    http: Client,
    base_url: String,
}

impl GoogleWebTranslator {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, TranslationError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn translate_url(&self, text: &str, source: Language, target: Language) -> String {
        format!(
            "{}/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.base_url,
            source.code(),
            target.code(),
            encode(text)
        )
    }
}

/// Join the translated segments of a web endpoint response
fn extract_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    Some(text)
}

#[async_trait]
impl Translator for GoogleWebTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslationError> {
        let response = self
            .http
            .get(self.translate_url(text, source, target))
            .send()
            .await?;

        let body: Value = handle_response(response).await?;

        extract_translation(&body).ok_or_else(|| {
            TranslationError::Deserialization("missing translation segments".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translator() -> GoogleWebTranslator {
        GoogleWebTranslator::new(
            "https://translate.example.com/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn builds_encoded_url() {
        let url = translator().translate_url("apple tree", Language::English, Language::Korean);
        assert_eq!(
            url,
            "https://translate.example.com/translate_a/single?client=gtx&sl=en&tl=ko&dt=t&q=apple%20tree"
        );
    }

    #[test]
    fn extracts_single_segment() {
        let body = json!([[["집", "house", null, null, 10]], null, "en"]);
        assert_eq!(extract_translation(&body), Some("집".to_string()));
    }

    #[test]
    fn joins_multiple_segments() {
        let body = json!([[["사과 ", "apple ", null, null, 3], ["나무", "tree", null, null, 3]], null, "en"]);
        assert_eq!(extract_translation(&body), Some("사과 나무".to_string()));
    }

    #[test]
    fn rejects_unexpected_shape() {
        assert_eq!(extract_translation(&json!({"error": "nope"})), None);
        assert_eq!(extract_translation(&json!([null])), None);
    }
}
