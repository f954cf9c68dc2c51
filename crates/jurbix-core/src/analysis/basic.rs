//! Basic counts and derived ratios.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Counts and simple averages for a text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BasicMetricsData {
    /// Whitespace-separated words.
    pub words: usize,
    /// Characters including whitespace.
    pub chars_with_spaces: usize,
    /// Characters excluding whitespace.
    pub chars_no_spaces: usize,
    /// Sentences.
    pub sentences: usize,
    /// Paragraphs.
    pub paragraphs: usize,
    /// Distinct words, case-insensitive.
    pub unique_words: usize,
    /// Average words per sentence, one decimal.
    pub avg_words_per_sentence: f64,
    /// Average characters per word, one decimal.
    pub avg_chars_per_word: f64,
    /// Estimated reading time in seconds.
    pub reading_time_seconds: u64,
    /// Estimated reading time, formatted.
    pub reading_time: String,
}

/// Compute basic metrics. Empty text yields zeros and `"0 min"`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn calculate_basic_metrics(text: &str) -> BasicMetricsData {
    let words = text::count_words(text);
    BasicMetricsData {
        words,
        chars_with_spaces: text::count_chars_with_spaces(text),
        chars_no_spaces: text::count_chars_no_spaces(text),
        sentences: text::count_sentences(text),
        paragraphs: text::count_paragraphs(text),
        unique_words: text::count_unique_words(text),
        avg_words_per_sentence: text::avg_words_per_sentence(text),
        avg_chars_per_word: text::avg_chars_per_word(text),
        reading_time_seconds: text::reading_time_seconds(words),
        reading_time: text::format_reading_time(words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        let m = calculate_basic_metrics("");
        assert_eq!(
            m,
            BasicMetricsData {
                reading_time: "0 min".to_string(),
                ..BasicMetricsData::default()
            }
        );
    }

    #[test]
    fn whitespace_only_is_all_zero() {
        let m = calculate_basic_metrics("  \n\n  ");
        assert_eq!(m.words, 0);
        assert_eq!(m.chars_with_spaces, 0);
        assert_eq!(m.paragraphs, 0);
        assert_eq!(m.reading_time, "0 min");
    }

    #[test]
    fn counts_a_short_text() {
        let m = calculate_basic_metrics("O sol nasceu. O dia começou.\n\nFim.");
        assert_eq!(m.words, 7);
        assert_eq!(m.sentences, 3);
        assert_eq!(m.paragraphs, 2);
        assert_eq!(m.unique_words, 6);
        assert_eq!(m.reading_time, "3 seg");
    }
}
