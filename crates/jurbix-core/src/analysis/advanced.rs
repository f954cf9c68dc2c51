//! Advanced metrics: readability, redundancy, sentiment and length.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::redundancy::analyze_redundancy;
use super::sentiment::{SentimentResult, analyze_sentiment};
use crate::level::{MetricResult, TOO_SHORT_FEEDBACK};
use crate::lexicon::Lexicon;
use crate::readability::{ReadabilityScores, StylePenalty, calculate_readability};
use crate::text;

/// Readability, redundancy, sentiment and a length remark for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdvancedMetricsData {
    /// Every readability index.
    pub readability: ReadabilityScores,
    /// Word-repetition index.
    pub redundancy: MetricResult,
    /// Sentiment scores.
    pub sentiment: SentimentResult,
    /// Remark on the text length.
    pub length_feedback: String,
}

/// The advanced metrics of an empty text.
pub fn empty_advanced_metrics() -> AdvancedMetricsData {
    AdvancedMetricsData {
        readability: ReadabilityScores::too_short(),
        redundancy: MetricResult::too_short(),
        sentiment: SentimentResult::neutral(),
        length_feedback: TOO_SHORT_FEEDBACK.to_string(),
    }
}

fn length_feedback(words: usize) -> String {
    match words {
        0 => TOO_SHORT_FEEDBACK.to_string(),
        1..100 => format!("Texto curto ({words} palavras): ideal para mensagens e posts."),
        100..=1000 => format!("Tamanho médio ({words} palavras): bom para artigos e e-mails."),
        _ => format!("Texto longo ({words} palavras): use seções para guiar o leitor."),
    }
}

/// Compute readability, redundancy and sentiment for `text`.
///
/// The JurbiX style penalty is passed as zero.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn calculate_advanced_metrics(text: &str, lexicon: &Lexicon) -> AdvancedMetricsData {
    if text.trim().is_empty() {
        return empty_advanced_metrics();
    }

    AdvancedMetricsData {
        readability: calculate_readability(text, StylePenalty::default()),
        redundancy: analyze_redundancy(text),
        sentiment: analyze_sentiment(text, lexicon),
        length_feedback: length_feedback(text::count_words(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn empty_text_matches_empty_shape() {
        let lexicon = Lexicon::builtin();
        assert_eq!(calculate_advanced_metrics("", &lexicon), empty_advanced_metrics());
        assert_eq!(calculate_advanced_metrics(" \n ", &lexicon), empty_advanced_metrics());
    }

    #[test]
    fn punctuation_only_degrades_to_empty_shape() {
        let lexicon = Lexicon::builtin();
        let m = calculate_advanced_metrics("...", &lexicon);
        assert_eq!(m.readability, ReadabilityScores::too_short());
        assert_eq!(m.redundancy.level, Level::NotApplicable);
    }

    #[test]
    fn populated_text_scores() {
        let lexicon = Lexicon::builtin();
        let m = calculate_advanced_metrics("O dia está ótimo. A praia está linda.", &lexicon);
        assert_ne!(m.readability.flesch_reading_ease.level, Level::NotApplicable);
        assert!(m.sentiment.compound > 0.0);
        assert!(m.length_feedback.starts_with("Texto curto"));
    }

    #[test]
    fn idempotent() {
        let lexicon = Lexicon::builtin();
        let text = "Não gostei do atendimento. Foi lento e caro.";
        assert_eq!(
            calculate_advanced_metrics(text, &lexicon),
            calculate_advanced_metrics(text, &lexicon)
        );
    }
}
