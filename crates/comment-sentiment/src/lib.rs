//! Sentiment classification for short user comments.
//!
//! Comments are scored with a polarity lexicon: every known word contributes
//! a score in [-1.0, 1.0], adjusted by a preceding intensifier or negator,
//! and the comment's polarity is the mean of those contributions.

mod lexicon;

use serde::Serialize;

/// Sentiment label of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in reporting order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Label for a polarity score: any positive score is positive, any
    /// negative score is negative, exactly zero is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub sentiment: Sentiment,
    /// Polarity in [-1.0, 1.0]
    pub polarity: f64,
}

impl Classification {
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            sentiment: Sentiment::from_polarity(polarity),
            polarity,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("classifier rejected input: {0}")]
    InvalidInput(String),

    #[error("classifier backend failed: {0}")]
    Backend(String),
}

/// Maps a text to a sentiment label.
pub trait SentimentClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

impl<C: SentimentClassifier + ?Sized> SentimentClassifier for &C {
    fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        (**self).classify(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

const INTENSIFIER_FACTOR: f64 = 1.3;
const NEGATION_FACTOR: f64 = -0.5;
/// How many tokens back a negator still applies.
const NEGATION_WINDOW: usize = 3;

/// Lexicon based polarity classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Polarity of `text` in [-1.0, 1.0]; 0.0 when no known word occurs.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut total = 0.0;
        let mut scored = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut score) = lexicon::score(token) else {
                continue;
            };

            if i > 0 && lexicon::is_intensifier(&tokens[i - 1]) {
                score = (score * INTENSIFIER_FACTOR).clamp(-1.0, 1.0);
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                score *= NEGATION_FACTOR;
            }

            total += score;
            scored += 1;
        }

        if scored == 0 {
            0.0
        } else {
            (total / scored as f64).clamp(-1.0, 1.0)
        }
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        Ok(Classification::from_polarity(self.polarity(text)))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Lowercase word tokens. Apostrophes stay inside words so "isn't" is one token.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|w| w.trim_matches(|c| c == '\'' || c == '\u{2019}'))
        .filter(|w| !w.is_empty())
        .map(|w| w.replace('\u{2019}', "'").to_lowercase())
        .collect()
}

fn is_negator(token: &str) -> bool {
    lexicon::is_negator(token) || token.ends_with("n't")
}
