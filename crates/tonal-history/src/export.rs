//! CSV export of history entries.

use std::fmt::Write as _;

use chrono::SecondsFormat;
use tonal_sentiment::SentimentResult;

const HEADER: &str = "Text,Sentiment,Rating,Confidence,Positive %,Neutral %,Negative %,Timestamp";

/// Render `items` as CSV, one row per result in iteration order.
///
/// The text column is always quoted with embedded quotes doubled; the share
/// columns are whole percentages.
pub fn export_csv<'a>(items: impl IntoIterator<Item = &'a SentimentResult>) -> String {
    let mut out = String::from(HEADER);
    for item in items {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "\n\"{}\",{},{},{},{},{},{},{}",
            item.text.replace('"', "\"\""),
            item.overall_sentiment,
            item.rating,
            item.confidence,
            percent(item.positive),
            percent(item.neutral),
            percent(item.negative),
            item.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
    }
    out
}

fn percent(share: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let pct = (share * 100.0).round() as i64;
    pct
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tonal_sentiment::SentimentLabel;

    use super::*;

    fn sample(text: &str) -> SentimentResult {
        SentimentResult {
            text: text.to_string(),
            positive: 0.25,
            negative: 0.75,
            neutral: 0.0,
            compound: -0.4,
            rating: 2,
            overall_sentiment: SentimentLabel::Negative,
            confidence: 0.61,
            language: Some("en".to_string()),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap(),
            id: "k3j9x0abc".to_string(),
        }
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(export_csv(&[]), HEADER);
    }

    #[test]
    fn rows_follow_header() {
        let csv = export_csv(&[sample("slow, but fine")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"slow, but fine\",negative,2,0.61,25,0,75,2024-03-09T08:30:00.000Z"
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = export_csv(&[sample("they said \"never again\"")]);
        assert!(csv.contains("\"they said \"\"never again\"\"\""));
    }
}
