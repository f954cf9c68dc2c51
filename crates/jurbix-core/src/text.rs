//! Lexical primitives.
//!
//! Word counting, sentence and paragraph segmentation, averages and reading
//! time. Every other module derives its tokens and segments from here.
//!
//! Sentence splitting is deliberately naive: it splits on runs of `.`, `!`
//! and `?` with no abbreviation awareness, so "Dr. Silva" yields two
//! segments.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::level::round1;

/// Reading speed used for reading-time estimates.
pub const WORDS_PER_MINUTE: f64 = 180.0;

/// Runs of sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// One or more blank lines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n+").expect("valid regex"));

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters including whitespace. Blank text counts 0.
pub fn count_chars_with_spaces(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.chars().count()
}

/// Count non-whitespace characters.
pub fn count_chars_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Count distinct words, case-insensitively, ignoring trailing `.!?;`.
pub fn count_unique_words(text: &str) -> usize {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .map(|w| w.trim_end_matches(['.', '!', '?', ';']).to_string())
        .filter(|w| !w.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count sentences.
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

/// Split text into trimmed, non-empty paragraphs separated by blank lines.
///
/// Non-empty text without any blank line is one paragraph.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Count paragraphs.
pub fn count_paragraphs(text: &str) -> usize {
    split_paragraphs(text).len()
}

/// Average words per sentence, one decimal. 0 with no sentences.
pub fn avg_words_per_sentence(text: &str) -> f64 {
    let sentences = count_sentences(text);
    if sentences == 0 {
        return 0.0;
    }
    round1(count_words(text) as f64 / sentences as f64)
}

/// Average non-space characters per word, one decimal. 0 with no words.
pub fn avg_chars_per_word(text: &str) -> f64 {
    let words = count_words(text);
    if words == 0 {
        return 0.0;
    }
    round1(count_chars_no_spaces(text) as f64 / words as f64)
}

/// Estimated reading time in whole seconds (rounded up).
pub fn reading_time_seconds(words: usize) -> u64 {
    let minutes = words as f64 / WORDS_PER_MINUTE;
    (minutes * 60.0).ceil() as u64
}

/// Format a reading time: `"<n> seg"` under a minute, else `"<n> min"`.
pub fn format_reading_time(words: usize) -> String {
    if words == 0 {
        return "0 min".to_string();
    }
    let minutes = words as f64 / WORDS_PER_MINUTE;
    if minutes < 1.0 {
        format!("{} seg", (minutes * 60.0).ceil() as u64)
    } else {
        format!("{} min", minutes.ceil() as u64)
    }
}

/// Lowercase a token and strip surrounding punctuation.
///
/// Keeps letters (including accented ones), digits and inner hyphens.
pub fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Normalized, non-empty tokens of `text`.
pub fn normalized_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Count alphabetic characters.
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}
