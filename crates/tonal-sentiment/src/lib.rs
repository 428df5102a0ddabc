//! Lexicon-based sentiment scoring for short feedback text.
//!
//! Tokenizes text, applies a static word lexicon with intensifier and
//! emphasis rules, and condenses the per-word contributions into a
//! [`SentimentResult`]: percentage breakdown, compound score, 1–5 rating,
//! label and confidence. Scoring is pure and synchronous; the word tables are
//! built once and shared read-only.

pub mod alert;
pub mod identity;
pub mod lexicon;
pub mod scorer;
pub mod tokenize;
pub mod types;

mod aggregate;

pub use alert::should_alert;
pub use identity::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
pub use scorer::{analyze_sentiment, score, Scorer};
pub use tokenize::{tokenize, Tokens};
pub use types::{SentimentLabel, SentimentResult, SentimentScores};
