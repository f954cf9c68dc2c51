//! Readability indices for Portuguese text.
//!
//! Five classic formulas plus the composite JurbiX index:
//!
//! | Index | Formula | Direction |
//! |-------|---------|-----------|
//! | Gunning Fog | `0.4 * (words/sentences + 100*complex/words)` | lower is easier |
//! | Flesch Reading Ease | `206.835 - 1.015*words/sentences - 84.6*syllables/words` | higher is easier |
//! | SMOG | `1.0430*sqrt(polysyllables * 30/sentences) + 3.1291` | lower is easier |
//! | Coleman-Liau | `0.0588*L - 0.296*S - 15.8` | lower is easier |
//! | Gulpease | `89 - 10*letters/words + 300*sentences/words` | higher is easier |
//!
//! Complex words for Gunning Fog are words longer than six letters, not
//! syllable-based. SMOG extrapolates the polysyllable count to a 30-sentence
//! sample when the text has fewer sentences, which amplifies noise on short
//! texts.
//!
//! JurbiX turns the three grade-level formulas into 0–100 ease scores scaled
//! by text length, averages them with Flesch and Gulpease, then adds
//! vocabulary and structure bonuses and a style penalty.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, MetricResult, Scale, round1};
use crate::syllables::count_syllables;
use crate::text;

/// Characters at which the JurbiX length scale saturates.
pub const JURBIX_FULL_SCALE_CHARS: f64 = 1000.0;

/// Ease points removed per grade level when normalising grade formulas.
const GRADE_TO_EASE: f64 = 5.0;

/// Maximum vocabulary bonus.
const UNIQUE_BONUS_CAP: f64 = 20.0;

/// Floor of the style penalty.
const STYLE_PENALTY_FLOOR: f64 = -5.0;

/// A newline followed by a list marker.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(1\.|-|\*)").expect("valid regex"));

/// Counts every readability formula needs, gathered once per text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// Sentences.
    pub sentences: usize,
    /// Total syllables.
    pub syllables: usize,
    /// Words with three or more syllables.
    pub polysyllables: usize,
    /// Words with more than six letters.
    pub complex_words: usize,
    /// Alphabetic characters.
    pub letters: usize,
    /// Characters including whitespace.
    pub chars_with_spaces: usize,
    /// Unique words divided by words.
    pub unique_ratio: f64,
    /// Paragraphs.
    pub paragraphs: usize,
    /// Whether a line starts a list (`1.`, `-` or `*`).
    pub has_list_marker: bool,
}

impl TextStats {
    /// Gather statistics for `text`.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self {
            sentences: text::count_sentences(text),
            letters: text::count_letters(text),
            chars_with_spaces: text::count_chars_with_spaces(text),
            paragraphs: text::count_paragraphs(text),
            has_list_marker: LIST_MARKER.is_match(text),
            ..Self::default()
        };

        let mut unique = HashSet::new();
        for raw in text.split_whitespace() {
            stats.words += 1;
            let cleaned = raw.trim_matches(|c: char| !c.is_alphabetic());
            if cleaned.is_empty() {
                continue;
            }
            let syllables = count_syllables(cleaned);
            stats.syllables += syllables;
            if syllables >= 3 {
                stats.polysyllables += 1;
            }
            if cleaned.chars().count() > 6 {
                stats.complex_words += 1;
            }
            unique.insert(cleaned.to_lowercase());
        }

        if stats.words > 0 {
            stats.unique_ratio = unique.len() as f64 / stats.words as f64;
        }
        stats
    }

    /// Whether the text is long enough for any formula.
    pub const fn is_scorable(&self) -> bool {
        self.words > 0 && self.sentences > 0
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }
}

/// Raw Gunning Fog index.
pub fn gunning_fog(stats: &TextStats) -> f64 {
    let complex_percent = 100.0 * stats.complex_words as f64 / stats.words as f64;
    0.4 * (stats.words_per_sentence() + complex_percent)
}

/// Flesch Reading Ease, clamped to `[0, 100]`.
pub fn flesch_reading_ease(stats: &TextStats) -> f64 {
    let syllables_per_word = stats.syllables as f64 / stats.words as f64;
    (206.835 - 1.015 * stats.words_per_sentence() - 84.6 * syllables_per_word).clamp(0.0, 100.0)
}

/// Raw SMOG grade with 30-sentence extrapolation.
pub fn smog(stats: &TextStats) -> f64 {
    let mut polysyllables = stats.polysyllables as f64;
    if stats.sentences < 30 {
        polysyllables *= 30.0 / stats.sentences as f64;
    }
    1.0430f64.mul_add(polysyllables.sqrt(), 3.1291)
}

/// Raw Coleman-Liau index.
pub fn coleman_liau(stats: &TextStats) -> f64 {
    let l = stats.letters as f64 / stats.words as f64 * 100.0;
    let s = stats.sentences as f64 / stats.words as f64 * 100.0;
    0.0588f64.mul_add(l, -0.296 * s) - 15.8
}

/// Gulpease index, clamped to `[0, 100]`.
pub fn gulpease(stats: &TextStats) -> f64 {
    let words = stats.words as f64;
    (89.0 - 10.0 * stats.letters as f64 / words + 300.0 * stats.sentences as f64 / words)
        .clamp(0.0, 100.0)
}

/// Style measurements that lower the JurbiX score.
///
/// The analysis pipeline passes [`StylePenalty::default`], so the penalty
/// is currently always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StylePenalty {
    /// Passive sentences as a percentage of all sentences.
    pub passive_percent: f64,
    /// Adverbs as a percentage of all words.
    pub adverb_percent: f64,
}

impl StylePenalty {
    fn value(self) -> f64 {
        let raw = -(self.passive_percent * 0.25 + self.adverb_percent * 0.5);
        raw.max(STYLE_PENALTY_FLOOR)
    }
}

/// Convert a grade-level score to 0–100 ease.
fn grade_to_ease(grade: f64, scale: f64) -> f64 {
    (100.0 - grade * GRADE_TO_EASE * scale).clamp(0.0, 100.0)
}

/// Weight of the grade-level components: grows with length, 1 from
/// [`JURBIX_FULL_SCALE_CHARS`] on.
pub fn jurbix_length_scale(chars_with_spaces: usize) -> f64 {
    (chars_with_spaces as f64 / JURBIX_FULL_SCALE_CHARS).min(1.0)
}

/// Composite JurbiX score, clamped to `[0, 100]` and rounded to one decimal.
pub fn jurbix(stats: &TextStats, penalty: StylePenalty) -> f64 {
    let scale = jurbix_length_scale(stats.chars_with_spaces);

    let components = [
        flesch_reading_ease(stats),
        gulpease(stats),
        grade_to_ease(gunning_fog(stats), scale),
        grade_to_ease(smog(stats), scale),
        grade_to_ease(coleman_liau(stats), scale),
    ];
    let base = components.iter().sum::<f64>() / components.len() as f64;

    let unique_bonus = (stats.unique_ratio * 25.0).min(UNIQUE_BONUS_CAP);

    let mut structure_bonus = 0.0;
    if stats.has_list_marker {
        structure_bonus += 5.0;
    }
    if stats.paragraphs > 0 && (stats.words as f64 / stats.paragraphs as f64) < 50.0 {
        structure_bonus += 5.0;
    }

    round1((base + unique_bonus + structure_bonus + penalty.value()).clamp(0.0, 100.0))
}

/// The readability indices, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityIndex {
    /// Gunning Fog.
    GunningFog,
    /// Flesch Reading Ease.
    FleschReadingEase,
    /// SMOG.
    Smog,
    /// Coleman-Liau.
    ColemanLiau,
    /// Gulpease.
    Gulpease,
    /// JurbiX composite.
    Jurbix,
}

impl ReadabilityIndex {
    /// Every index, in display order.
    pub const ALL: [Self; 6] = [
        Self::GunningFog,
        Self::FleschReadingEase,
        Self::Smog,
        Self::ColemanLiau,
        Self::Gulpease,
        Self::Jurbix,
    ];

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GunningFog => "Gunning Fog",
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::Smog => "SMOG",
            Self::ColemanLiau => "Coleman-Liau",
            Self::Gulpease => "Gulpease",
            Self::Jurbix => "JurbiX",
        }
    }

    /// Stable snake_case identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::GunningFog => "gunning_fog",
            Self::FleschReadingEase => "flesch_reading_ease",
            Self::Smog => "smog",
            Self::ColemanLiau => "coleman_liau",
            Self::Gulpease => "gulpease",
            Self::Jurbix => "jurbix",
        }
    }

    /// Whether a higher score means easier text.
    pub const fn higher_is_easier(self) -> bool {
        matches!(self, Self::FleschReadingEase | Self::Gulpease | Self::Jurbix)
    }

    fn classify(self, score: f64) -> Level {
        match self {
            Self::FleschReadingEase => Level::higher_is_better(score, [75.0, 50.0, 25.0]),
            Self::Gulpease | Self::Jurbix => Level::higher_is_better(score, [80.0, 60.0, 40.0]),
            Self::GunningFog | Self::Smog | Self::ColemanLiau => {
                Level::lower_is_better(score, [8.0, 12.0, 16.0])
            }
        }
    }

    fn feedback(self, score: f64, level: Level) -> String {
        let verdict = match level {
            Level::Excellent => "texto muito fácil de ler.",
            Level::Good => "texto fácil de ler para a maioria do público.",
            Level::Fair => "leitura mediana; frases mais curtas ajudariam.",
            Level::Poor => "texto difícil; simplifique frases e vocabulário.",
            Level::NotApplicable => return crate::level::TOO_SHORT_FEEDBACK.to_string(),
        };
        format!("{} {score:.1}: {verdict}", self.label())
    }

    fn result(self, raw: f64) -> MetricResult {
        let score = round1(raw);
        let level = self.classify(score);
        MetricResult::new(score, level, Scale::Ease, self.feedback(score, level))
    }
}

impl fmt::Display for ReadabilityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One result per readability index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScores {
    /// Gunning Fog.
    pub gunning_fog: MetricResult,
    /// Flesch Reading Ease.
    pub flesch_reading_ease: MetricResult,
    /// SMOG.
    pub smog: MetricResult,
    /// Coleman-Liau.
    pub coleman_liau: MetricResult,
    /// Gulpease.
    pub gulpease: MetricResult,
    /// JurbiX.
    pub jurbix: MetricResult,
}

impl ReadabilityScores {
    /// Every index marked too short.
    pub fn too_short() -> Self {
        Self {
            gunning_fog: MetricResult::too_short(),
            flesch_reading_ease: MetricResult::too_short(),
            smog: MetricResult::too_short(),
            coleman_liau: MetricResult::too_short(),
            gulpease: MetricResult::too_short(),
            jurbix: MetricResult::too_short(),
        }
    }

    /// Result for one index.
    pub const fn get(&self, index: ReadabilityIndex) -> &MetricResult {
        match index {
            ReadabilityIndex::GunningFog => &self.gunning_fog,
            ReadabilityIndex::FleschReadingEase => &self.flesch_reading_ease,
            ReadabilityIndex::Smog => &self.smog,
            ReadabilityIndex::ColemanLiau => &self.coleman_liau,
            ReadabilityIndex::Gulpease => &self.gulpease,
            ReadabilityIndex::Jurbix => &self.jurbix,
        }
    }

    /// Walk the indices in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ReadabilityIndex, &MetricResult)> {
        ReadabilityIndex::ALL.into_iter().map(|i| (i, self.get(i)))
    }
}

/// Score `text` on every readability index.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn calculate_readability(text: &str, penalty: StylePenalty) -> ReadabilityScores {
    let stats = TextStats::from_text(text);
    if !stats.is_scorable() {
        return ReadabilityScores::too_short();
    }

    let jurbix_score = jurbix(&stats, penalty);
    tracing::debug!(
        words = stats.words,
        sentences = stats.sentences,
        jurbix = jurbix_score,
        "readability computed"
    );

    ReadabilityScores {
        gunning_fog: ReadabilityIndex::GunningFog.result(gunning_fog(&stats)),
        flesch_reading_ease: ReadabilityIndex::FleschReadingEase
            .result(flesch_reading_ease(&stats)),
        smog: ReadabilityIndex::Smog.result(smog(&stats)),
        coleman_liau: ReadabilityIndex::ColemanLiau.result(coleman_liau(&stats)),
        gulpease: ReadabilityIndex::Gulpease.result(gulpease(&stats)),
        jurbix: ReadabilityIndex::Jurbix.result(jurbix_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "O gato dormiu no sofá. A menina leu um livro novo. \
                          O dia estava claro e bonito.";

    #[test]
    fn empty_text_is_too_short() {
        let scores = calculate_readability("", StylePenalty::default());
        for (_, result) in scores.iter() {
            assert_eq!(result.level, Level::NotApplicable);
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn no_terminator_still_one_sentence() {
        let scores = calculate_readability("texto sem ponto final", StylePenalty::default());
        assert_ne!(scores.flesch_reading_ease.level, Level::NotApplicable);
    }

    #[test]
    fn smog_extrapolates_to_thirty_sentences() {
        let stats = TextStats {
            words: 50,
            sentences: 10,
            polysyllables: 7,
            ..TextStats::default()
        };
        let expected = 1.0430 * (7.0f64 * 3.0).sqrt() + 3.1291;
        assert!((smog(&stats) - expected).abs() < 1e-9);
    }

    #[test]
    fn smog_from_text_with_ten_sentences() {
        let text = "Casa bonita. ".repeat(10);
        let stats = TextStats::from_text(&text);
        assert_eq!(stats.sentences, 10);
        let k = stats.polysyllables as f64;
        let expected = 1.0430 * (k * 3.0).sqrt() + 3.1291;
        assert!((smog(&stats) - expected).abs() < 1e-9);
    }

    #[test]
    fn ratio_formulas_ignore_duplication() {
        let doubled = format!("{SAMPLE}\n\n{SAMPLE}");
        let once = calculate_readability(SAMPLE, StylePenalty::default());
        let twice = calculate_readability(&doubled, StylePenalty::default());
        assert_eq!(once.flesch_reading_ease.score, twice.flesch_reading_ease.score);
        assert_eq!(once.gunning_fog.score, twice.gunning_fog.score);
        assert_eq!(once.coleman_liau.score, twice.coleman_liau.score);
    }

    #[test]
    fn jurbix_scale_saturates_at_one_thousand_chars() {
        assert_eq!(jurbix_length_scale(0), 0.0);
        assert_eq!(jurbix_length_scale(500), 0.5);
        assert!(jurbix_length_scale(999) < 1.0);
        assert_eq!(jurbix_length_scale(1000), 1.0);
        assert_eq!(jurbix_length_scale(2000), 1.0);
    }

    #[test]
    fn jurbix_depends_on_length_only_below_one_thousand_chars() {
        // Same ratios, different lengths.
        let with_chars = |chars_with_spaces| TextStats {
            words: 100,
            sentences: 5,
            syllables: 200,
            polysyllables: 20,
            complex_words: 20,
            letters: 500,
            chars_with_spaces,
            unique_ratio: 0.5,
            paragraphs: 1,
            has_list_marker: false,
        };
        let score = |chars| jurbix(&with_chars(chars), StylePenalty::default());

        assert!(score(500) > score(900));
        assert!(score(900) > score(1000));
        assert_eq!(score(1000), score(2000));
        assert_eq!(score(1000), score(5000));
    }

    #[test]
    fn jurbix_is_bounded() {
        for text in [SAMPLE, "Oi.", "Inconstitucionalissimamente."] {
            let stats = TextStats::from_text(text);
            let score = jurbix(&stats, StylePenalty::default());
            assert!((0.0..=100.0).contains(&score), "{text}: {score}");
        }
    }

    #[test]
    fn style_penalty_is_floored() {
        let stats = TextStats::from_text(SAMPLE);
        let heavy = StylePenalty {
            passive_percent: 100.0,
            adverb_percent: 100.0,
        };
        let none = jurbix(&stats, StylePenalty::default());
        let penalised = jurbix(&stats, heavy);
        assert!(none - penalised <= 5.0 + 1e-9);
    }

    #[test]
    fn list_marker_adds_bonus() {
        let plain = TextStats::from_text("Itens importantes.\nUm. Dois.");
        let listed = TextStats::from_text("Itens importantes.\n- Um. Dois.");
        assert!(!plain.has_list_marker);
        assert!(listed.has_list_marker);
    }

    #[test]
    fn levels_follow_direction() {
        assert_eq!(ReadabilityIndex::GunningFog.classify(7.0), Level::Excellent);
        assert_eq!(ReadabilityIndex::GunningFog.classify(20.0), Level::Poor);
        assert_eq!(ReadabilityIndex::FleschReadingEase.classify(80.0), Level::Excellent);
        assert_eq!(ReadabilityIndex::FleschReadingEase.classify(10.0), Level::Poor);
    }

    #[test]
    fn iteration_follows_display_order() {
        let scores = calculate_readability(SAMPLE, StylePenalty::default());
        let order: Vec<_> = scores.iter().map(|(i, _)| i).collect();
        assert_eq!(order, ReadabilityIndex::ALL.to_vec());
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            calculate_readability(SAMPLE, StylePenalty::default()),
            calculate_readability(SAMPLE, StylePenalty::default())
        );
    }
}
