use serde::Serialize;
use tonal_sentiment::{SentimentLabel, SentimentResult};

/// Number of most recent entries carried in [`HistoryStats::recent_analyses`].
pub const RECENT_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// Aggregates over the full history contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_analyses: usize,
    pub sentiment_counts: SentimentCounts,
    /// Mean rating, rounded to 1 decimal.
    pub avg_rating: f64,
    /// Mean confidence, rounded to 2 decimals.
    pub avg_confidence: f64,
    pub recent_analyses: Vec<SentimentResult>,
}

impl HistoryStats {
    /// Compute statistics over `items` (most recent first), or `None` if empty.
    pub fn compute<'a>(items: impl Iterator<Item = &'a SentimentResult> + Clone) -> Option<Self> {
        let total_analyses = items.clone().count();
        if total_analyses == 0 {
            return None;
        }

        let mut sentiment_counts = SentimentCounts::default();
        let mut rating_sum = 0.0;
        let mut confidence_sum = 0.0;
        for item in items.clone() {
            match item.overall_sentiment {
                SentimentLabel::Positive => sentiment_counts.positive += 1,
                SentimentLabel::Neutral => sentiment_counts.neutral += 1,
                SentimentLabel::Negative => sentiment_counts.negative += 1,
            }
            rating_sum += f64::from(item.rating);
            confidence_sum += item.confidence;
        }

        #[allow(clippy::cast_precision_loss)]
        let n = total_analyses as f64;

        Some(Self {
            total_analyses,
            sentiment_counts,
            avg_rating: (rating_sum / n * 10.0).round() / 10.0,
            avg_confidence: (confidence_sum / n * 100.0).round() / 100.0,
            recent_analyses: items.take(RECENT_COUNT).cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tonal_sentiment::analyze_sentiment;

    use super::*;

    #[test]
    fn empty_history_has_no_stats() {
        let items: Vec<SentimentResult> = Vec::new();
        assert!(HistoryStats::compute(items.iter()).is_none());
    }

    #[test]
    fn counts_and_means() {
        let mut items = vec![
            analyze_sentiment("great stuff"),
            analyze_sentiment("awful stuff"),
            analyze_sentiment("stuff"),
        ];
        items[0].rating = 5;
        items[0].confidence = 0.9;
        items[1].rating = 1;
        items[1].confidence = 0.5;
        items[2].rating = 3;
        items[2].confidence = 0.2;

        let stats = HistoryStats::compute(items.iter()).expect("stats");
        assert_eq!(stats.total_analyses, 3);
        assert_eq!(
            stats.sentiment_counts,
            SentimentCounts {
                positive: 1,
                neutral: 1,
                negative: 1
            }
        );
        assert_eq!(stats.avg_rating, 3.0);
        assert_eq!(stats.avg_confidence, 0.53);
        assert_eq!(stats.recent_analyses.len(), 3);
        assert_eq!(stats.recent_analyses[0].id, items[0].id);
    }

    #[test]
    fn average_rating_rounds_to_one_decimal() {
        let mut items: Vec<SentimentResult> = (0..3).map(|_| analyze_sentiment("good")).collect();
        items[0].rating = 4;
        items[1].rating = 4;
        items[2].rating = 5;
        let stats = HistoryStats::compute(items.iter()).expect("stats");
        assert_eq!(stats.avg_rating, 4.3);
    }

    #[test]
    fn recent_is_capped() {
        let items: Vec<SentimentResult> = (0..15).map(|_| analyze_sentiment("nice")).collect();
        let stats = HistoryStats::compute(items.iter()).expect("stats");
        assert_eq!(stats.total_analyses, 15);
        assert_eq!(stats.recent_analyses.len(), RECENT_COUNT);
    }
}
