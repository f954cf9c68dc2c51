//! Lexicon-driven sentiment scoring.
//!
//! Tokens are normalized (punctuation stripped, lowercased) and looked up in
//! the [`Lexicon`]. A negation word opens a window over the next
//! [`NEGATION_WINDOW`] tokens; an emotion word inside the window is scaled by
//! [`NEGATION_WEIGHT`], which flips its polarity. An intensifier scales the
//! next emotion word by [`INTENSIFIER_MULTIPLIER`]. Emoji are matched on the
//! raw tokens before normalization strips them, and lexicon bigrams are
//! matched on adjacent normalized tokens.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::round3;
use crate::lexicon::Lexicon;
use crate::text;

/// Tokens covered by a negation.
pub const NEGATION_WINDOW: usize = 3;

/// Factor applied to an emotion word inside a negation window.
pub const NEGATION_WEIGHT: f64 = -0.74;

/// Factor applied to the emotion word after an intensifier.
///
/// Below 1.0, so intensifiers dampen instead of amplify.
pub const INTENSIFIER_MULTIPLIER: f64 = 0.8;

/// Weight of each matched emoji.
pub const EMOJI_WEIGHT: f64 = 1.5;

/// Weight of each matched bigram.
pub const BIGRAM_WEIGHT: f64 = 1.0;

/// Compound score at or beyond which text is labelled positive or negative.
pub const LABEL_THRESHOLD: f64 = 0.05;

/// Overall polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Compound ≥ 0.05.
    Positivo,
    /// Compound ≤ −0.05.
    Negativo,
    /// Anything in between.
    Neutro,
}

impl Sentiment {
    /// Label a compound score.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= LABEL_THRESHOLD {
            Self::Positivo
        } else if compound <= -LABEL_THRESHOLD {
            Self::Negativo
        } else {
            Self::Neutro
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positivo => "positivo",
            Self::Negativo => "negativo",
            Self::Neutro => "neutro",
        }
    }
}

/// Sentiment proportions and compound score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
    /// Share of positive weight, three decimals.
    pub pos: f64,
    /// Share of negative weight, three decimals.
    pub neg: f64,
    /// 1 when nothing scored, else 0.
    pub neu: f64,
    /// `(pos - neg) / (pos + neg)`, three decimals. 0 when nothing scored.
    pub compound: f64,
    /// Label derived from `compound`.
    pub sentiment: Sentiment,
    /// Human-readable summary.
    pub feedback: String,
}

impl SentimentResult {
    /// The result for text with no scored words.
    pub fn neutral() -> Self {
        Self {
            pos: 0.0,
            neg: 0.0,
            neu: 1.0,
            compound: 0.0,
            sentiment: Sentiment::Neutro,
            feedback: "Nenhuma palavra com carga emocional encontrada.".to_string(),
        }
    }
}

fn count_emoji(token: &str, emojis: &[String]) -> usize {
    emojis.iter().map(|e| token.matches(e.as_str()).count()).sum()
}

/// Score the sentiment of `text` against `lexicon`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_sentiment(text: &str, lexicon: &Lexicon) -> SentimentResult {
    let mut pos = 0.0;
    let mut neg = 0.0;

    for raw in text.split_whitespace() {
        pos += EMOJI_WEIGHT * count_emoji(raw, &lexicon.positive_emojis) as f64;
        neg += EMOJI_WEIGHT * count_emoji(raw, &lexicon.negative_emojis) as f64;
    }

    let tokens = text::normalized_words(text);

    for pair in tokens.windows(2) {
        let bigram = format!("{} {}", pair[0], pair[1]);
        if lexicon.bigrams_positive.contains(&bigram) {
            pos += BIGRAM_WEIGHT;
        } else if lexicon.bigrams_negative.contains(&bigram) {
            neg += BIGRAM_WEIGHT;
        }
    }

    let mut window = 0usize;
    let mut multiplier = 1.0;
    for token in &tokens {
        if lexicon.negations.contains(token) {
            window = NEGATION_WINDOW;
            continue;
        }
        if lexicon.intensifiers.contains(token) {
            multiplier = INTENSIFIER_MULTIPLIER;
            window = window.saturating_sub(1);
            continue;
        }

        let polarity = if lexicon.positive.contains(token) {
            1.0
        } else if lexicon.negative.contains(token) {
            -1.0
        } else {
            window = window.saturating_sub(1);
            continue;
        };

        let mut value = polarity * multiplier;
        if window > 0 {
            value *= NEGATION_WEIGHT;
        }
        if value > 0.0 {
            pos += value;
        } else {
            neg -= value;
        }
        multiplier = 1.0;
        window = window.saturating_sub(1);
    }

    let total = pos + neg;
    if total <= 0.0 {
        return SentimentResult::neutral();
    }

    let compound = round3((pos - neg) / total);
    let sentiment = Sentiment::from_compound(compound);
    tracing::debug!(pos, neg, compound, "sentiment scored");

    SentimentResult {
        pos: round3(pos / total),
        neg: round3(neg / total),
        neu: 0.0,
        compound,
        sentiment,
        feedback: format!("Tom {} (compound {compound:.2}).", sentiment.label()),
    }
}
