//! Text normalization and word tokenization.

use std::sync::LazyLock;

use regex::Regex;

/// Sentence punctuation kept through normalization and split off words.
const SENTENCE_MARKS: &[char] = &['!', '?', '.', ','];

/// Matches anything that is not a letter, digit, whitespace or sentence mark.
static DISCARDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s!?.,]").expect("valid normalization regex"));

/// Normalized form of an input text, iterable as lowercase word tokens.
///
/// Iteration is lazy and can be restarted any number of times via
/// [`Tokens::iter`].
#[derive(Debug, Clone)]
pub struct Tokens {
    normalized: String,
}

impl Tokens {
    /// Lowercase `text` and blank out every discarded symbol.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let normalized = DISCARDED.replace_all(&lowered, " ").into_owned();
        Self { normalized }
    }

    /// Iterate the tokens in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.normalized
            .split_whitespace()
            .map(|chunk| chunk.trim_matches(SENTENCE_MARKS))
            .filter(|token| !token.is_empty())
    }

    /// Number of tokens.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Convenience wrapper collecting the tokens of `text`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    Tokens::new(text).iter().map(str::to_owned).collect()
}
