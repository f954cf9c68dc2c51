//! Discourse connector density.
//!
//! Tokens are matched one at a time against the connector list, so the
//! multi-word entries ("por outro lado", "no entanto") never match. The
//! acceptable density window depends on the text length:
//!
//! | Words | Acceptable % |
//! |-------|--------------|
//! | < 50 | 4 – 12 |
//! | ≤ 500 | 2 – 8 |
//! | > 500 | 1.5 – 6 |
//!
//! Densities outside the window are `Ruim` in either direction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, Scale, TOO_SHORT_FEEDBACK, percent, round1};
use crate::text;
use crate::word_lists::DISCOURSE_CONNECTORS;

/// Acceptable connector density for a text of `words` words.
pub fn connector_band(words: usize) -> (f64, f64) {
    if words < 50 {
        (4.0, 12.0)
    } else if words <= 500 {
        (2.0, 8.0)
    } else {
        (1.5, 6.0)
    }
}

/// Connector summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectorResult {
    /// Connector occurrences.
    pub count: usize,
    /// Connectors as a percentage of all words.
    pub percentage: f64,
    /// Lower bound of the acceptable window for this length.
    pub min_percent: f64,
    /// Upper bound of the acceptable window for this length.
    pub max_percent: f64,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
    /// Matched connectors in text order.
    pub connectors: Vec<String>,
}

/// Measure discourse connector density in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_discourse_connectors(text: &str) -> ConnectorResult {
    let words = text::normalized_words(text);
    let (min_percent, max_percent) = connector_band(words.len());
    if words.is_empty() {
        return ConnectorResult {
            count: 0,
            percentage: 0.0,
            min_percent,
            max_percent,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: TOO_SHORT_FEEDBACK.to_string(),
            connectors: Vec::new(),
        };
    }

    let connectors: Vec<String> = words
        .iter()
        .filter(|w| DISCOURSE_CONNECTORS.contains(w.as_str()))
        .cloned()
        .collect();
    let count = connectors.len();
    let ratio = percent(count, words.len());
    let percentage = round1(ratio);

    let (level, feedback) = if ratio < min_percent {
        (
            Level::Poor,
            format!(
                "Poucos conectivos ({percentage}%): use termos como \"portanto\" e \"além\" para ligar as ideias (ideal entre {min_percent}% e {max_percent}%)."
            ),
        )
    } else if ratio > max_percent {
        (
            Level::Poor,
            format!(
                "Excesso de conectivos ({percentage}%): o texto fica pesado (ideal entre {min_percent}% e {max_percent}%)."
            ),
        )
    } else {
        (
            Level::Good,
            format!("Conectivos em {percentage}% das palavras: boa coesão."),
        )
    };

    ConnectorResult {
        count,
        percentage,
        min_percent,
        max_percent,
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
        connectors,
    }
}
