//! Static word tables driving the scorer.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Base polarity per word.
///
/// Keys are lowercase single words. Positive values carry positive sentiment,
/// negative values negative sentiment; entries scored exactly `0.0` are
/// recognized but carry no polarity.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("amazing", 3.2),
    ("awesome", 3.1),
    ("brilliant", 3.0),
    ("excellent", 2.9),
    ("fantastic", 3.0),
    ("great", 2.5),
    ("good", 2.0),
    ("wonderful", 2.8),
    ("perfect", 3.5),
    ("outstanding", 3.2),
    ("superb", 3.0),
    ("marvelous", 2.9),
    ("splendid", 2.8),
    ("fabulous", 2.9),
    ("terrific", 2.7),
    ("love", 2.5),
    ("like", 1.8),
    ("enjoy", 2.2),
    ("happy", 2.4),
    ("joy", 2.6),
    ("pleased", 2.1),
    ("satisfied", 2.0),
    ("delighted", 2.8),
    ("thrilled", 3.0),
    ("excited", 2.5),
    ("glad", 2.2),
    ("beautiful", 2.4),
    ("nice", 1.9),
    ("sweet", 2.1),
    ("cool", 1.7),
    ("fun", 2.0),
    // Negative
    ("terrible", -3.2),
    ("awful", -3.0),
    ("horrible", -3.1),
    ("bad", -2.2),
    ("worst", -3.5),
    ("hate", -2.8),
    ("dislike", -2.0),
    ("disgusting", -3.2),
    ("pathetic", -2.9),
    ("useless", -2.7),
    ("annoying", -2.3),
    ("frustrating", -2.5),
    ("disappointed", -2.4),
    ("angry", -2.6),
    ("mad", -2.4),
    ("sad", -2.1),
    ("depressed", -2.8),
    ("upset", -2.2),
    ("worried", -1.9),
    ("concerned", -1.7),
    ("poor", -2.0),
    ("weak", -1.8),
    ("ugly", -2.3),
    ("stupid", -2.5),
    ("dumb", -2.2),
    // Mild / neutral
    ("okay", 0.2),
    ("fine", 0.3),
    ("decent", 0.5),
    ("average", 0.1),
    ("normal", 0.0),
    ("maybe", 0.0),
    ("perhaps", 0.0),
    ("possibly", 0.0),
    ("probably", 0.1),
    ("might", 0.0),
];

/// Multiplier applied to the next sentiment-bearing word.
///
/// Values above 1.0 amplify, values in `(0.0, 1.0)` soften, and negative
/// values model negation by flipping the sign of the following word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("extremely", 1.8),
    ("incredibly", 1.7),
    ("absolutely", 1.6),
    ("totally", 1.5),
    ("completely", 1.6),
    ("quite", 1.3),
    ("fairly", 1.2),
    ("rather", 1.2),
    ("so", 1.4),
    ("too", 1.3),
    ("highly", 1.4),
    ("deeply", 1.5),
    ("truly", 1.4),
    ("barely", 0.5),
    ("hardly", 0.4),
    ("scarcely", 0.4),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    // Negations
    ("not", -1.0),
    ("never", -1.2),
    ("no", -0.8),
    ("none", -0.9),
    ("nothing", -1.0),
];

static LEXICON_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| LEXICON.iter().copied().collect());

static INTENSIFIER_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

/// Base polarity of `word`, or `None` if it is not in the lexicon.
///
/// `word` must already be lowercase.
#[must_use]
pub fn polarity(word: &str) -> Option<f64> {
    LEXICON_MAP.get(word).copied()
}

/// Intensifier multiplier of `word`, or `None` if it is not an intensifier.
///
/// `word` must already be lowercase.
#[must_use]
pub fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIER_MAP.get(word).copied()
}
