//! Adverb density.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, Scale, TOO_SHORT_FEEDBACK, percent, round1};
use crate::text;
use crate::word_lists::COMMON_ADVERBS;

/// Adverb summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdverbResult {
    /// Adverb occurrences.
    pub count: usize,
    /// Adverbs as a percentage of all words.
    pub percentage: f64,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
    /// Matched adverbs in text order.
    pub adverbs: Vec<String>,
}

/// Whether a normalized token is an adverb.
pub fn is_adverb(word: &str) -> bool {
    (word.ends_with("mente") && word.chars().count() > 5) || COMMON_ADVERBS.contains(word)
}

/// Count adverbs in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_adverbs(text: &str) -> AdverbResult {
    let words = text::normalized_words(text);
    if words.is_empty() {
        return AdverbResult {
            count: 0,
            percentage: 0.0,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: TOO_SHORT_FEEDBACK.to_string(),
            adverbs: Vec::new(),
        };
    }

    let adverbs: Vec<String> = words.iter().filter(|w| is_adverb(w)).cloned().collect();
    let count = adverbs.len();
    let ratio = percent(count, words.len());
    let percentage = round1(ratio);

    let level = if ratio <= 2.0 {
        Level::Excellent
    } else if ratio <= 4.0 {
        Level::Good
    } else {
        Level::Poor
    };
    let feedback = match level {
        Level::Excellent => format!("Advérbios em {percentage}% das palavras: uso econômico."),
        Level::Good => format!("Advérbios em {percentage}% das palavras: aceitável."),
        _ => format!("Advérbios em {percentage}% das palavras: corte os dispensáveis."),
    };

    AdverbResult {
        count,
        percentage,
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
        adverbs,
    }
}
