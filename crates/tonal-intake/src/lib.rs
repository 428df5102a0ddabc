//! Everything between raw feedback and a stored [`tonal_sentiment::SentimentResult`]:
//! file text extraction, optional translation, scoring, history recording
//! and negative-sentiment alert delivery.

pub mod alert;
pub mod error;
pub mod files;
pub mod pipeline;
pub mod translate;

pub use alert::{alert_message, AlertClient, AlertConfig};
pub use error::IntakeError;
pub use files::extract_text;
pub use pipeline::{AlertStatus, Intake, IntakeSettings, ProcessOutcome};
pub use translate::{detect_locally, TranslationClient, TranslationResult, UNKNOWN_LANGUAGE};
