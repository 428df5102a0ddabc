//! Translation of incoming text to English before scoring.
//!
//! Talks to the Google Translate v2 REST API when a key is available and
//! falls back to a local ASCII heuristic otherwise. Translation never fails
//! from the caller's point of view: any error yields the original text tagged
//! with [`UNKNOWN_LANGUAGE`].

use std::sync::LazyLock;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com";
const TRANSLATE_PATH: &str = "language/translate/v2";

/// Language tag used when the source language could not be determined.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

const CONFIDENT: f64 = 0.9;
const UNSURE: f64 = 0.1;

/// Text made only of these characters is assumed to be English.
static ENGLISH_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-Z0-9\s.,!?;:'"()-]+$"#).expect("valid english heuristic regex")
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub detected_language: String,
    pub confidence: f64,
}

impl TranslationResult {
    /// Untranslated passthrough used whenever the API cannot be relied on.
    fn fallback(text: &str) -> Self {
        Self {
            original_text: text.to_owned(),
            translated_text: text.to_owned(),
            detected_language: UNKNOWN_LANGUAGE.to_owned(),
            confidence: UNSURE,
        }
    }
}

/// Guess the language of `text` without calling out.
#[must_use]
pub fn detect_locally(text: &str) -> TranslationResult {
    let english = ENGLISH_LIKE.is_match(text);
    TranslationResult {
        original_text: text.to_owned(),
        translated_text: text.to_owned(),
        detected_language: if english { "en" } else { UNKNOWN_LANGUAGE }.to_owned(),
        confidence: if english { CONFIDENT } else { UNSURE },
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: Option<TranslateData>,
    error: Option<TranslateApiError>,
}

#[derive(Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[derive(Deserialize)]
struct TranslateApiError {
    message: String,
}

/// Client for the translation API.
pub struct TranslationClient {
    client: Client,
    base_url: String,
}

impl TranslationClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, IntakeError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, IntakeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tonal/0.1 (feedback-sentiment)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Translate `text` to English.
    ///
    /// Without an `api_key` the text is returned unchanged with a locally
    /// guessed language. API and network failures are logged and produce
    /// the untranslated text tagged [`UNKNOWN_LANGUAGE`].
    pub async fn translate_to_english(&self, text: &str, api_key: Option<&str>) -> TranslationResult {
        let Some(key) = api_key.filter(|k| !k.trim().is_empty()) else {
            return detect_locally(text);
        };

        match self.request_translation(text, key).await {
            Ok(result) => {
                tracing::debug!(language = %result.detected_language, "text translated");
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "translation failed; scoring original text");
                TranslationResult::fallback(text)
            }
        }
    }

    async fn request_translation(
        &self,
        text: &str,
        key: &str,
    ) -> Result<TranslationResult, IntakeError> {
        let url = format!(
            "{}/{TRANSLATE_PATH}?key={}",
            self.base_url,
            utf8_percent_encode(key, NON_ALPHANUMERIC)
        );
        let request = TranslateRequest {
            q: text,
            target: "en",
            format: "text",
        };

        // The key rides in the query string; keep it out of error text.
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body: TranslateResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        if let Some(err) = body.error {
            return Err(IntakeError::TranslationApi(err.message));
        }
        if !status.is_success() {
            return Err(IntakeError::TranslationApi(format!("status {status}")));
        }

        let translation = body
            .data
            .and_then(|d| d.translations.into_iter().next())
            .ok_or_else(|| {
                IntakeError::TranslationApi("response contained no translations".to_owned())
            })?;

        Ok(TranslationResult {
            original_text: text.to_owned(),
            translated_text: translation.translated_text,
            detected_language: translation
                .detected_source_language
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_owned()),
            confidence: CONFIDENT,
        })
    }
}
