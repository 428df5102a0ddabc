//! Delivery of negative-sentiment alerts through an EmailJS-style endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tonal_core::AlertSettings;
use tonal_sentiment::SentimentResult;

use crate::error::IntakeError;

const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "api/v1.0/email/send";
const DEFAULT_SENDER: &str = "noreply@sentiment-analyzer.com";
const SUBJECT: &str = "Negative Sentiment Alert - Action Required";

/// Where and how to deliver an alert.
#[derive(Clone)]
pub struct AlertConfig {
    /// Delivery credential. Without it nothing is sent.
    pub api_key: Option<String>,
    pub sender_email: Option<String>,
    pub recipient_email: String,
    pub service_id: String,
    pub template_id: String,
}

impl std::fmt::Debug for AlertConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("sender_email", &self.sender_email)
            .field("recipient_email", &self.recipient_email)
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .finish()
    }
}

impl From<&AlertSettings> for AlertConfig {
    fn from(settings: &AlertSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            sender_email: settings.sender_email.clone(),
            recipient_email: settings.recipient_email.clone(),
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: String,
}

/// Human-readable alert body.
#[must_use]
pub fn alert_message(result: &SentimentResult) -> String {
    format!(
        "Negative sentiment detected in feedback analysis:\n\n\
         Text: \"{}\"\n\
         Rating: {}/5\n\
         Negative Percentage: {:.0}%\n\
         Confidence: {:.0}%\n\
         Timestamp: {}\n\n\
         Please review and take appropriate action.",
        result.text,
        result.rating,
        (result.negative * 100.0).round(),
        (result.confidence * 100.0).round(),
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// HTTP client for alert delivery.
pub struct AlertClient {
    client: Client,
    base_url: String,
}

impl AlertClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, IntakeError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
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

    /// Attempt to deliver an alert for `result`. Returns whether it was sent.
    ///
    /// Without a credential the alert is only logged. Delivery failures are
    /// logged and reported as `false`.
    pub async fn send_alert(&self, result: &SentimentResult, config: &AlertConfig) -> bool {
        let Some(user_id) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            tracing::info!(
                to = %config.recipient_email,
                id = %result.id,
                rating = result.rating,
                negative = result.negative,
                "alert not sent: no delivery credential configured"
            );
            return false;
        };

        let request = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id,
            template_params: TemplateParams {
                to_email: &config.recipient_email,
                from_email: config.sender_email.as_deref().unwrap_or(DEFAULT_SENDER),
                subject: SUBJECT,
                message: alert_message(result),
            },
        };

        let url = format!("{}/{SEND_PATH}", self.base_url);
        match self.client.post(url).json(&request).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(to = %config.recipient_email, id = %result.id, "alert sent");
                true
            }
            Ok(response) => {
                tracing::warn!(
                    status = %response.status(),
                    id = %result.id,
                    "alert delivery rejected"
                );
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, id = %result.id, "alert delivery failed");
                false
            }
        }
    }
}
