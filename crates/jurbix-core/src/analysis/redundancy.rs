//! Word-repetition index.
//!
//! For each normalized token with frequency above one, add `freq - 1`; divide
//! by the total word count and express as a percentage.

use std::collections::HashMap;

use crate::level::{Level, MetricResult, Scale, round1};
use crate::text;

/// Score word repetition in `text`. Lower is better.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_redundancy(text: &str) -> MetricResult {
    let words = text::normalized_words(text);
    if words.is_empty() {
        return MetricResult::too_short();
    }

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for w in &words {
        *freq.entry(w.as_str()).or_default() += 1;
    }
    let repeated: usize = freq.values().filter(|&&n| n > 1).map(|n| n - 1).sum();
    let score = round1(repeated as f64 / words.len() as f64 * 100.0);

    let level = if score < 15.0 {
        Level::Excellent
    } else if score < 30.0 {
        Level::Good
    } else if score < 50.0 {
        Level::Fair
    } else {
        Level::Poor
    };

    let feedback = match level {
        Level::Excellent => format!("Redundância de {score}%: vocabulário bem variado."),
        Level::Good => format!("Redundância de {score}%: poucas repetições."),
        Level::Fair => format!("Redundância de {score}%: há repetições que podem ser trocadas por sinônimos."),
        _ => format!("Redundância de {score}%: muitas palavras repetidas."),
    };
    MetricResult::new(score, level, Scale::Quality, feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_not_applicable() {
        assert_eq!(analyze_redundancy("").level, Level::NotApplicable);
        assert_eq!(analyze_redundancy("...").level, Level::NotApplicable);
    }

    #[test]
    fn no_repetition_is_excellent() {
        let r = analyze_redundancy("Cada palavra aparece uma vez");
        assert_eq!(r.score, 0.0);
        assert_eq!(r.level, Level::Excellent);
    }

    #[test]
    fn repetition_counts_extra_occurrences() {
        // "casa" x3 and "bonita" x2: (2 + 1) / 6 = 50%
        let r = analyze_redundancy("Casa casa, CASA bonita bonita rua");
        assert_eq!(r.score, 50.0);
        assert_eq!(r.level, Level::Poor);
    }

    #[test]
    fn boundaries_are_strict() {
        // 3 extra occurrences over 10 words = 30%: not Good.
        let r = analyze_redundancy("a a a a um dois tres quatro cinco seis");
        assert_eq!(r.score, 30.0);
        assert_eq!(r.level, Level::Fair);
    }
}
