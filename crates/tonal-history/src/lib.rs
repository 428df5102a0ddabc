//! Bounded, most-recent-first history of scored results.
//!
//! Results are keyed by id and persisted as a JSON array so the history
//! survives restarts. Aggregate statistics and CSV export are computed over
//! the full contents.

pub mod error;
pub mod export;
pub mod stats;
pub mod store;

pub use error::HistoryError;
pub use export::export_csv;
pub use stats::{HistoryStats, SentimentCounts};
pub use store::{HistoryStore, DEFAULT_MAX_ITEMS};
