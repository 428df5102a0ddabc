use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete sentiment label derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The deterministic part of a scoring call.
///
/// Identical input text always yields an identical `SentimentScores`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Share of positive polarity in `[0, 1]`.
    pub positive: f64,
    /// Share of negative polarity in `[0, 1]`.
    pub negative: f64,
    /// Remaining share in `[0, 1]`; the three shares sum to 1.
    pub neutral: f64,
    /// Normalized polarity in `[-1, 1]`.
    pub compound: f64,
    /// Star rating in `1..=5`.
    pub rating: u8,
    pub overall_sentiment: SentimentLabel,
    /// Confidence estimate in `[0, 1]`.
    pub confidence: f64,
}

impl SentimentScores {
    /// Canonical result for text carrying no signal at all.
    pub const NEUTRAL: Self = Self {
        positive: 0.0,
        negative: 0.0,
        neutral: 1.0,
        compound: 0.0,
        rating: 3,
        overall_sentiment: SentimentLabel::Neutral,
        confidence: 0.0,
    };
}

/// A scored piece of text, stamped with its identity.
///
/// Created once per scoring call and treated as an immutable value
/// afterwards; only `language` may be filled in by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// The input text, unmodified. Empty for empty input.
    pub text: String,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
    pub rating: u8,
    pub overall_sentiment: SentimentLabel,
    pub confidence: f64,
    /// Language tag set by the caller after detection or translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

impl SentimentResult {
    /// The deterministic scores carried by this result.
    #[must_use]
    pub fn scores(&self) -> SentimentScores {
        SentimentScores {
            positive: self.positive,
            negative: self.negative,
            neutral: self.neutral,
            compound: self.compound,
            rating: self.rating,
            overall_sentiment: self.overall_sentiment,
            confidence: self.confidence,
        }
    }
}
