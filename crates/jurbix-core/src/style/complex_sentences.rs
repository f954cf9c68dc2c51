//! Long-sentence detection.
//!
//! A sentence with more than [`MAX_SENTENCE_WORDS`] words is complex. Each
//! flagged sentence carries syllable, comma and conjunction counts plus its
//! average word length; these details are reported but do not affect the
//! level.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, Scale, TOO_SHORT_FEEDBACK, percent, round1};
use crate::syllables::count_text_syllables;
use crate::text;
use crate::word_lists::CONJUNCTIONS;

/// Words above which a sentence is complex.
pub const MAX_SENTENCE_WORDS: usize = 20;

/// A sentence over the word limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexSentence {
    /// The sentence number (1-indexed).
    pub sentence_num: usize,
    /// The sentence text.
    pub text: String,
    /// Words in the sentence.
    pub words: usize,
    /// Syllables in the sentence.
    pub syllables: usize,
    /// Commas in the sentence.
    pub commas: usize,
    /// Conjunction occurrences.
    pub conjunctions: usize,
    /// Average letters per word, one decimal.
    pub avg_word_length: f64,
}

/// Complex-sentence summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexSentenceResult {
    /// Complex sentences.
    pub count: usize,
    /// Complex sentences as a percentage of all sentences.
    pub percentage: f64,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
    /// One entry per complex sentence.
    pub sentences: Vec<ComplexSentence>,
}

fn describe(sentence_num: usize, sentence: &str) -> ComplexSentence {
    let words = text::count_words(sentence);
    let conjunctions = text::normalized_words(sentence)
        .iter()
        .filter(|w| CONJUNCTIONS.contains(w.as_str()))
        .count();
    ComplexSentence {
        sentence_num,
        text: sentence.to_string(),
        words,
        syllables: count_text_syllables(sentence),
        commas: sentence.matches(',').count(),
        conjunctions,
        avg_word_length: round1(text::count_letters(sentence) as f64 / words as f64),
    }
}

/// Find sentences longer than [`MAX_SENTENCE_WORDS`].
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_complex_sentences(text: &str) -> ComplexSentenceResult {
    let all = text::split_sentences(text);
    if all.is_empty() {
        return ComplexSentenceResult {
            count: 0,
            percentage: 0.0,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: TOO_SHORT_FEEDBACK.to_string(),
            sentences: Vec::new(),
        };
    }

    let sentences: Vec<ComplexSentence> = all
        .iter()
        .enumerate()
        .filter(|(_, s)| text::count_words(s) > MAX_SENTENCE_WORDS)
        .map(|(i, s)| describe(i + 1, s))
        .collect();

    let count = sentences.len();
    let ratio = percent(count, all.len());
    let percentage = round1(ratio);
    let (level, feedback) = if count == 0 {
        (Level::Excellent, "Todas as frases têm tamanho adequado.".to_string())
    } else if ratio <= 15.0 {
        (
            Level::Good,
            format!("{count} frase(s) longa(s) ({percentage}%): revise as mais extensas."),
        )
    } else {
        (
            Level::Poor,
            format!("{count} frase(s) longa(s) ({percentage}%): divida frases com mais de {MAX_SENTENCE_WORDS} palavras."),
        )
    };

    ComplexSentenceResult {
        count,
        percentage,
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
        sentences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "O projeto, que começou no ano passado com uma equipe pequena e \
                        poucos recursos, cresceu muito e hoje atende clientes em várias \
                        cidades do país.";

    #[test]
    fn long_sentence_details() {
        let r = analyze_complex_sentences(LONG);
        assert_eq!(r.count, 1);
        assert_eq!(r.level, Level::Poor);
        let s = &r.sentences[0];
        assert_eq!(s.words, 25);
        assert_eq!(s.commas, 2);
        // "que", "e", "e"
        assert_eq!(s.conjunctions, 3);
        assert!(s.syllables > s.words);
        assert!(s.avg_word_length > 0.0);
    }

    #[test]
    fn exactly_twenty_words_is_fine() {
        let sentence = format!("{}.", ["palavra"; 20].join(" "));
        let r = analyze_complex_sentences(&sentence);
        assert_eq!(r.count, 0);
        assert_eq!(r.level, Level::Excellent);
    }

    #[test]
    fn low_ratio_is_good() {
        let mut text = "Frase curta aqui. ".repeat(9);
        text.push_str(LONG);
        let r = analyze_complex_sentences(&text);
        assert_eq!(r.percentage, 10.0);
        assert_eq!(r.level, Level::Good);
        assert_eq!(r.sentences[0].sentence_num, 10);
    }

    #[test]
    fn empty_text_is_not_applicable() {
        assert_eq!(analyze_complex_sentences("").level, Level::NotApplicable);
    }
}
