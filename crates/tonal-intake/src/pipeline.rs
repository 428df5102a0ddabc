//! The end-to-end intake flow: translate, score, record, alert.

use serde::Serialize;
use tokio::sync::Mutex;
use tonal_core::AppConfig;
use tonal_history::HistoryStore;
use tonal_sentiment::{should_alert, Clock, IdGenerator, Scorer, SentimentResult};

use crate::alert::{AlertClient, AlertConfig};
use crate::error::IntakeError;
use crate::translate::{TranslationClient, TranslationResult};

/// Language recorded when translation is switched off.
const ASSUMED_LANGUAGE: &str = "en";

/// Runtime switches for the intake flow.
#[derive(Debug, Clone, Default)]
pub struct IntakeSettings {
    pub auto_translate: bool,
    pub translate_api_key: Option<String>,
    /// `None` disables alert delivery.
    pub alert: Option<AlertConfig>,
}

impl From<&AppConfig> for IntakeSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            auto_translate: config.auto_translate,
            translate_api_key: config.translate_api_key.clone(),
            alert: config.alerts.as_ref().map(AlertConfig::from),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// The result did not meet the alert threshold.
    NotRequired,
    /// An alert was delivered.
    Sent,
    /// The threshold was met but nothing was delivered.
    Triggered,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    pub result: SentimentResult,
    /// Present only when auto-translate ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationResult>,
    pub alert: AlertStatus,
}

/// Owns the scorer and the outbound clients used for each submission.
pub struct Intake<C = tonal_sentiment::SystemClock, G = tonal_sentiment::RandomIdGenerator> {
    scorer: Scorer<C, G>,
    translator: TranslationClient,
    alerter: AlertClient,
    settings: IntakeSettings,
}

impl Intake {
    /// Build the intake flow from application config.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Http`] if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, IntakeError> {
        let translator =
            TranslationClient::with_base_url(config.http_timeout_secs, &config.translate_base_url)?;
        let alerter = match &config.alerts {
            Some(alerts) => AlertClient::with_base_url(config.http_timeout_secs, &alerts.base_url)?,
            None => AlertClient::new(config.http_timeout_secs)?,
        };
        Ok(Self::new(
            Scorer::new(),
            translator,
            alerter,
            IntakeSettings::from(config),
        ))
    }
}

impl<C: Clock, G: IdGenerator> Intake<C, G> {
    #[must_use]
    pub fn new(
        scorer: Scorer<C, G>,
        translator: TranslationClient,
        alerter: AlertClient,
        settings: IntakeSettings,
    ) -> Self {
        Self {
            scorer,
            translator,
            alerter,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &IntakeSettings {
        &self.settings
    }

    /// Score one submission and record it in `history`.
    ///
    /// A history write failure is logged; the result is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::EmptyText`] if `text` is blank.
    pub async fn process(
        &self,
        text: &str,
        history: &Mutex<HistoryStore>,
    ) -> Result<ProcessOutcome, IntakeError> {
        if text.trim().is_empty() {
            return Err(IntakeError::EmptyText);
        }

        let translation = if self.settings.auto_translate {
            Some(
                self.translator
                    .translate_to_english(text, self.settings.translate_api_key.as_deref())
                    .await,
            )
        } else {
            None
        };

        let (scored_text, language) = match &translation {
            Some(t) => (t.translated_text.as_str(), t.detected_language.clone()),
            None => (text, ASSUMED_LANGUAGE.to_owned()),
        };

        let mut result = self.scorer.analyze(scored_text);
        result.language = Some(language);

        tracing::info!(
            id = %result.id,
            sentiment = %result.overall_sentiment,
            rating = result.rating,
            compound = result.compound,
            "feedback analyzed"
        );

        if let Err(e) = history.lock().await.append(result.clone()) {
            tracing::warn!(error = %e, id = %result.id, "failed to persist history entry");
        }

        let alert = self.dispatch_alert(&result).await;

        Ok(ProcessOutcome {
            result,
            translation,
            alert,
        })
    }

    async fn dispatch_alert(&self, result: &SentimentResult) -> AlertStatus {
        if !should_alert(result) {
            return AlertStatus::NotRequired;
        }
        let Some(config) = &self.settings.alert else {
            tracing::info!(id = %result.id, "alert threshold met; alerts disabled");
            return AlertStatus::Triggered;
        };
        if self.alerter.send_alert(result, config).await {
            AlertStatus::Sent
        } else {
            AlertStatus::Triggered
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
