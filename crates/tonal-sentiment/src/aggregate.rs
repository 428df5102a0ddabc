//! Turns per-token contributions into the final scores.

use crate::types::{SentimentLabel, SentimentScores};

/// Compound shift per `!` in the raw text, in the direction of the existing sign.
pub(crate) const EXCLAMATION_BOOST: f64 = 0.292;

/// Smoothing constant of the length normalization `x / sqrt(n² + α)`.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Compound scores inside `(-DEADBAND, DEADBAND)` are labelled neutral.
pub(crate) const DEADBAND: f64 = 0.05;

/// Weight of a zero-valued contribution in the percentage total.
const NEUTRAL_WEIGHT: f64 = 0.5;

/// Everything the aggregator needs from one scoring pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tally<'a> {
    pub contributions: &'a [f64],
    pub token_count: usize,
    pub exclamations: usize,
}

pub(crate) fn aggregate(tally: Tally<'_>) -> SentimentScores {
    let Tally {
        contributions,
        token_count,
        exclamations,
    } = tally;

    let positive_sum: f64 = contributions.iter().filter(|c| **c > 0.0).sum();
    let negative_sum: f64 = contributions
        .iter()
        .filter(|c| **c < 0.0)
        .sum::<f64>()
        .abs();
    #[allow(clippy::cast_precision_loss)]
    let neutral_count = contributions.iter().filter(|c| **c == 0.0).count() as f64;

    let mut raw = contributions.iter().sum::<f64>();
    #[allow(clippy::cast_precision_loss)]
    let boost = EXCLAMATION_BOOST * exclamations as f64;
    // A zero sum is pushed negative, never flipped.
    if raw > 0.0 {
        raw += boost;
    } else {
        raw -= boost;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = token_count as f64;
    let compound = if token_count > 0 {
        raw / (n * n + NORMALIZATION_ALPHA).sqrt()
    } else {
        0.0
    }
    .clamp(-1.0, 1.0);

    let total = positive_sum + negative_sum + NEUTRAL_WEIGHT * neutral_count;
    let (positive, negative) = if total > 0.0 {
        (positive_sum / total, negative_sum / total)
    } else {
        (0.0, 0.0)
    };
    let (positive, negative, neutral) = shares(positive, negative);

    let confidence = confidence(compound, token_count, n);

    SentimentScores {
        positive,
        negative,
        neutral,
        compound: round2(compound),
        rating: rating(compound),
        overall_sentiment: label(compound),
        confidence: round2(confidence),
    }
}

/// Round the three shares to 2 decimals so that they still sum to 1.
fn shares(positive: f64, negative: f64) -> (f64, f64, f64) {
    let positive = round2(positive);
    let mut negative = round2(negative);
    if positive + negative > 1.0 {
        negative = round2(1.0 - positive);
    }
    let neutral = round2((1.0 - positive - negative).max(0.0));
    (positive, negative, neutral)
}

/// Map compound onto a 1..=5 star scale.
pub(crate) fn rating(compound: f64) -> u8 {
    let stars = (((compound + 1.0) / 2.0) * 4.0 + 1.0).round().clamp(1.0, 5.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stars = stars as u8;
    stars
}

pub(crate) fn label(compound: f64) -> SentimentLabel {
    if compound >= DEADBAND {
        SentimentLabel::Positive
    } else if compound <= -DEADBAND {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn confidence(compound: f64, token_count: usize, n: f64) -> f64 {
    let strength = compound.abs();
    let word_count_factor = (n / 10.0).min(1.0);
    let mut confidence = (strength + word_count_factor) / 2.0;
    if strength > 0.5 {
        confidence += 0.2;
    }
    if token_count > 20 {
        confidence += 0.1;
    }
    confidence.clamp(0.0, 1.0)
}

/// Round to 2 decimal places, ties away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(contributions: &[f64], token_count: usize, exclamations: usize) -> SentimentScores {
        aggregate(Tally {
            contributions,
            token_count,
            exclamations,
        })
    }

    #[test]
    fn no_contributions_is_fully_neutral() {
        let scores = run(&[], 4, 0);
        assert_eq!(scores.positive, 0.0);
        assert_eq!(scores.negative, 0.0);
        assert_eq!(scores.neutral, 1.0);
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.rating, 3);
        assert_eq!(scores.overall_sentiment, SentimentLabel::Neutral);
        // (0 + 0.4) / 2
        assert_eq!(scores.confidence, 0.2);
    }

    #[test]
    fn exclamations_push_zero_sum_negative() {
        // -0.292 / sqrt(4 + 15)
        let scores = run(&[], 2, 1);
        assert_eq!(scores.compound, -0.07);
        assert_eq!(scores.overall_sentiment, SentimentLabel::Negative);
        assert_eq!(scores.neutral, 1.0);
    }

    #[test]
    fn exclamations_amplify_existing_sign() {
        let calm = run(&[-2.0], 3, 0);
        let loud = run(&[-2.0], 3, 2);
        assert!(loud.compound < calm.compound);

        let calm = run(&[2.0], 3, 0);
        let loud = run(&[2.0], 3, 2);
        assert!(loud.compound > calm.compound);
    }

    #[test]
    fn zero_tokens_forces_zero_compound() {
        let scores = run(&[], 0, 3);
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.overall_sentiment, SentimentLabel::Neutral);
        assert_eq!(scores.confidence, 0.0);
    }

    #[test]
    fn compound_is_clamped() {
        let scores = run(&[3.5, 3.5, 3.5], 1, 0);
        assert_eq!(scores.compound, 1.0);
        assert_eq!(scores.rating, 5);

        let scores = run(&[-3.5, -3.5, -3.5], 1, 0);
        assert_eq!(scores.compound, -1.0);
        assert_eq!(scores.rating, 1);
    }

    #[test]
    fn percentages_split_by_magnitude() {
        let scores = run(&[3.0, -1.0], 2, 0);
        assert_eq!(scores.positive, 0.75);
        assert_eq!(scores.negative, 0.25);
        assert_eq!(scores.neutral, 0.0);
    }

    #[test]
    fn zero_contributions_take_half_weight() {
        let scores = run(&[1.0, 0.0], 2, 0);
        // total = 1 + 0 + 0.5
        assert_eq!(scores.positive, 0.67);
        assert_eq!(scores.negative, 0.0);
        assert_eq!(scores.neutral, 0.33);
    }

    #[test]
    fn rounded_shares_never_exceed_one() {
        // 1/8 and 7/8 both round up on their own.
        let scores = run(&[1.0, -7.0], 2, 0);
        let sum = scores.positive + scores.negative + scores.neutral;
        assert!((sum - 1.0).abs() < 1e-9, "shares sum to {sum}");
    }

    #[test]
    fn rating_is_monotonic_and_bounded() {
        let mut previous = 0;
        for step in -100..=100 {
            let compound = f64::from(step) / 100.0;
            let stars = rating(compound);
            assert!((1..=5).contains(&stars));
            assert!(stars >= previous, "rating decreased at {compound}");
            previous = stars;
        }
        assert_eq!(rating(-1.0), 1);
        assert_eq!(rating(0.0), 3);
        assert_eq!(rating(1.0), 5);
    }

    #[test]
    fn label_deadband_boundaries() {
        assert_eq!(label(0.05), SentimentLabel::Positive);
        assert_eq!(label(0.049), SentimentLabel::Neutral);
        assert_eq!(label(-0.049), SentimentLabel::Neutral);
        assert_eq!(label(-0.05), SentimentLabel::Negative);
    }

    #[test]
    fn confidence_rewards_strength_and_length() {
        // strength 0 with 25 tokens: (0 + 1) / 2 + 0.1
        let long_neutral = run(&[], 25, 0);
        assert_eq!(long_neutral.confidence, 0.6);

        // Strong and long saturates at 1.
        let strong = run(&[3.5, 3.5, 3.5, 3.5, 3.5, 3.5, 3.5, 3.5, 3.5], 25, 0);
        assert_eq!(strong.confidence, 1.0);
    }

    #[test]
    fn round2_ties_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(0.3333), 0.33);
    }
}
