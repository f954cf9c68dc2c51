//! Passive voice detection.
//!
//! Scans each sentence for an auxiliary ("foi", "são", "estava"...) followed
//! directly by a participle: an irregular form from the list or any token
//! ending in `-ado`/`-ido`. A sentence is flagged at most once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, Scale, TOO_SHORT_FEEDBACK, percent, round1};
use crate::text;
use crate::word_lists::{IRREGULAR_PARTICIPLES, PASSIVE_AUXILIARIES};

/// A detected passive construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveVoiceMatch {
    /// The sentence number (1-indexed).
    pub sentence_num: usize,
    /// The auxiliary verb (e.g. "foi").
    pub auxiliary: String,
    /// The participle (e.g. "escrito").
    pub participle: String,
    /// The sentence text.
    pub sentence: String,
}

/// Passive voice summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveVoiceResult {
    /// Sentences with a passive construction.
    pub count: usize,
    /// Flagged sentences as a percentage of all sentences.
    pub percentage: f64,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
    /// One entry per flagged sentence.
    pub instances: Vec<PassiveVoiceMatch>,
}

fn is_participle(word: &str) -> bool {
    IRREGULAR_PARTICIPLES.contains(word) || word.ends_with("ado") || word.ends_with("ido")
}

/// Detect passive sentences in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_passive_voice(text: &str) -> PassiveVoiceResult {
    let sentences = text::split_sentences(text);
    if sentences.is_empty() {
        return PassiveVoiceResult {
            count: 0,
            percentage: 0.0,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: TOO_SHORT_FEEDBACK.to_string(),
            instances: Vec::new(),
        };
    }

    let mut instances = Vec::new();
    for (idx, sentence) in sentences.iter().enumerate() {
        let words = text::normalized_words(sentence);
        let hit = words
            .windows(2)
            .find(|pair| PASSIVE_AUXILIARIES.contains(pair[0].as_str()) && is_participle(&pair[1]));
        if let Some(pair) = hit {
            instances.push(PassiveVoiceMatch {
                sentence_num: idx + 1,
                auxiliary: pair[0].clone(),
                participle: pair[1].clone(),
                sentence: (*sentence).to_string(),
            });
        }
    }

    let count = instances.len();
    let ratio = percent(count, sentences.len());
    let percentage = round1(ratio);
    let (level, feedback) = if count == 0 {
        (Level::Excellent, "Nenhuma construção na voz passiva.".to_string())
    } else if ratio <= 5.0 {
        (
            Level::Good,
            format!("{count} frase(s) na voz passiva ({percentage}%): uso moderado."),
        )
    } else {
        (
            Level::Poor,
            format!("{count} frase(s) na voz passiva ({percentage}%): prefira a voz ativa."),
        )
    };

    PassiveVoiceResult {
        count,
        percentage,
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
        instances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_participle_is_flagged() {
        let r = analyze_passive_voice("O relatório foi escrito pelo gerente.");
        assert_eq!(r.count, 1);
        assert_eq!(r.percentage, 100.0);
        assert_eq!(r.level, Level::Poor);
        assert_eq!(r.label, "Ruim");
        assert_eq!(r.instances[0].auxiliary, "foi");
        assert_eq!(r.instances[0].participle, "escrito");
    }

    #[test]
    fn regular_participle_is_flagged() {
        let r = analyze_passive_voice("A casa foi vendida ontem. O bolo foi assado hoje.");
        // "vendida" ends in -ida, not -ido.
        assert_eq!(r.count, 1);
        assert_eq!(r.instances[0].sentence_num, 2);
    }

    #[test]
    fn one_flag_per_sentence() {
        let r = analyze_passive_voice("O texto foi escrito e foi revisado.");
        assert_eq!(r.count, 1);
    }

    #[test]
    fn active_voice_is_excellent() {
        let r = analyze_passive_voice("O gerente escreveu o relatório.");
        assert_eq!(r.count, 0);
        assert_eq!(r.level, Level::Excellent);
    }

    #[test]
    fn low_ratio_is_good() {
        let mut text = "O gerente escreveu o relatório. ".repeat(19);
        text.push_str("O relatório foi escrito.");
        let r = analyze_passive_voice(&text);
        assert_eq!(r.percentage, 5.0);
        assert_eq!(r.level, Level::Good);
    }

    #[test]
    fn ratio_just_above_five_percent_is_poor() {
        // 6 of 119 is 5.04%, reported as 5.0 but still over the limit.
        let mut text = "O gerente escreveu o relatório. ".repeat(113);
        text.push_str(&"O relatório foi escrito. ".repeat(6));
        let r = analyze_passive_voice(&text);
        assert_eq!(r.count, 6);
        assert_eq!(r.percentage, 5.0);
        assert_eq!(r.level, Level::Poor);
    }

    #[test]
    fn empty_text_is_not_applicable() {
        assert_eq!(analyze_passive_voice("").level, Level::NotApplicable);
    }
}
