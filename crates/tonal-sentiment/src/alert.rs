//! Rule deciding whether a result warrants an external notification.

use crate::types::SentimentResult;

/// Negative share at or above which a result is flagged.
pub const ALERT_NEGATIVE_SHARE: f64 = 0.70;

/// Ratings strictly below this are flagged.
pub const ALERT_RATING_BELOW: u8 = 2;

/// `true` when `result` is negative enough to notify someone about.
///
/// Pure; delivering the alert is left to the caller.
#[must_use]
pub fn should_alert(result: &SentimentResult) -> bool {
    result.negative >= ALERT_NEGATIVE_SHARE || result.rating < ALERT_RATING_BELOW
}
