//! Lexical diversity as Shannon entropy (bits) over word frequencies.
//!
//! Breakpoints are fixed at 2.5 and 3.5 bits. Profiles carry equivalent
//! thresholds, but this analyzer does not read them.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, Scale, TOO_SHORT_FEEDBACK, round3};
use crate::text;

/// Minimum words needed to score diversity.
pub const MIN_WORDS: usize = 10;

/// Entropy at or above which diversity is excellent.
pub const EXCELLENT_ENTROPY: f64 = 3.5;

/// Entropy at or above which diversity is good.
pub const GOOD_ENTROPY: f64 = 2.5;

/// Lexical diversity summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexicalDiversityResult {
    /// Shannon entropy in bits, three decimals.
    pub shannon_index: f64,
    /// Distinct words.
    pub unique_words: usize,
    /// All words.
    pub total_words: usize,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
}

/// Shannon entropy (log base 2) of the word distribution.
pub fn shannon_entropy(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for w in words {
        *freq.entry(w.as_str()).or_default() += 1;
    }
    let total = words.len() as f64;
    freq.values()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Measure lexical diversity of `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_lexical_diversity(text: &str) -> LexicalDiversityResult {
    let words = text::normalized_words(text);
    let unique_words = words.iter().collect::<HashSet<_>>().len();

    if words.len() < MIN_WORDS {
        return LexicalDiversityResult {
            shannon_index: 0.0,
            unique_words,
            total_words: words.len(),
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: TOO_SHORT_FEEDBACK.to_string(),
        };
    }

    let shannon_index = round3(shannon_entropy(&words));
    let level = if shannon_index >= EXCELLENT_ENTROPY {
        Level::Excellent
    } else if shannon_index >= GOOD_ENTROPY {
        Level::Good
    } else {
        Level::Poor
    };
    let feedback = match level {
        Level::Excellent => format!("Índice de Shannon {shannon_index:.2}: vocabulário rico."),
        Level::Good => format!("Índice de Shannon {shannon_index:.2}: vocabulário adequado."),
        _ => format!("Índice de Shannon {shannon_index:.2}: vocabulário repetitivo; varie as palavras."),
    };

    LexicalDiversityResult {
        shannon_index,
        unique_words,
        total_words: words.len(),
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_ten_words() {
        let r = analyze_lexical_diversity("um dois três quatro cinco seis sete oito nove");
        assert_eq!(r.level, Level::NotApplicable);
        assert_eq!(r.total_words, 9);
    }

    #[test]
    fn uniform_distribution_is_log2_n() {
        let words: Vec<String> = (0..16).map(|i| format!("w{i}")).collect();
        assert!((shannon_entropy(&words) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn repetitive_text_is_poor() {
        let r = analyze_lexical_diversity(&"sim não ".repeat(10));
        assert_eq!(r.shannon_index, 1.0);
        assert_eq!(r.level, Level::Poor);
    }

    #[test]
    fn varied_text_is_excellent() {
        let text = "O sol nasceu devagar sobre a serra enquanto pássaros cantavam \
                    e crianças corriam pela praça antiga da cidade";
        let r = analyze_lexical_diversity(text);
        assert!(r.shannon_index >= 3.5);
        assert_eq!(r.level, Level::Excellent);
    }
}
