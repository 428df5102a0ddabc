//! Lexicon scorer for free-form feedback text.

use crate::aggregate::{aggregate, Tally};
use crate::identity::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use crate::lexicon::{intensifier, polarity};
use crate::tokenize::Tokens;
use crate::types::{SentimentResult, SentimentScores};

/// Extra weight for a sentiment word written in capitals in the source text.
pub(crate) const EMPHASIS_BOOST: f64 = 1.3;

/// Words this short are never treated as emphasized.
const EMPHASIS_MIN_CHARS: usize = 3;

/// Walk the tokens once and produce one signed contribution per
/// sentiment-bearing word.
///
/// An intensifier only affects the token immediately after it: the pending
/// multiplier is reset after every non-intensifier token, and a second
/// intensifier in a row replaces the first.
pub(crate) fn accumulate<'a>(original: &str, tokens: impl Iterator<Item = &'a str>) -> Vec<f64> {
    let mut pending_multiplier = 1.0;
    let mut contributions = Vec::new();

    for token in tokens {
        if let Some(multiplier) = intensifier(token) {
            pending_multiplier = multiplier;
            continue;
        }

        let base = polarity(token).unwrap_or(0.0);
        if base != 0.0 {
            let mut contribution = base * pending_multiplier;
            if is_emphasized(original, token) {
                contribution *= EMPHASIS_BOOST;
            }
            contributions.push(contribution);
        }

        pending_multiplier = 1.0;
    }

    contributions
}

fn is_emphasized(original: &str, token: &str) -> bool {
    token.chars().count() >= EMPHASIS_MIN_CHARS && original.contains(&token.to_uppercase())
}

/// Score `text` without stamping an identity.
///
/// Pure and deterministic. Empty or whitespace-only text short-circuits to
/// [`SentimentScores::NEUTRAL`].
#[must_use]
pub fn score(text: &str) -> SentimentScores {
    if text.trim().is_empty() {
        return SentimentScores::NEUTRAL;
    }

    let tokens = Tokens::new(text);
    let contributions = accumulate(text, tokens.iter());

    aggregate(Tally {
        contributions: &contributions,
        token_count: tokens.count(),
        exclamations: text.matches('!').count(),
    })
}

/// Scores text and stamps each result with an id and timestamp.
///
/// Holds no state between calls; one `Scorer` can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer<C = SystemClock, G = RandomIdGenerator> {
    clock: C,
    ids: G,
}

impl Scorer {
    /// A scorer using wall-clock time and random ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, G: IdGenerator> Scorer<C, G> {
    /// A scorer with injected identity sources.
    #[must_use]
    pub fn with_identity(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Score `text` and wrap the scores in a fresh [`SentimentResult`].
    ///
    /// Never fails. Empty input yields the canonical neutral result with an
    /// empty `text`.
    #[must_use]
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let scores = score(text);
        let text = if text.trim().is_empty() { "" } else { text };

        SentimentResult {
            text: text.to_owned(),
            positive: scores.positive,
            negative: scores.negative,
            neutral: scores.neutral,
            compound: scores.compound,
            rating: scores.rating,
            overall_sentiment: scores.overall_sentiment,
            confidence: scores.confidence,
            language: None,
            timestamp: self.clock.now(),
            id: self.ids.next_id(),
        }
    }
}

/// Score `text` with the default identity sources.
#[must_use]
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    Scorer::new().analyze(text)
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
