//! Accessibility scoring.
//!
//! Three sub-scores start at 100 and lose capped penalties:
//!
//! - **Cognitive**: long sentences, complex vocabulary, words used only once
//!   (a rough proxy for inconsistent terminology), unclear pronouns.
//! - **Visual**: long paragraphs, no headings or lists in a multi-paragraph
//!   text, erratic sentence lengths, one long unbroken block.
//! - **Linguistic**: technical terms, idioms, regionalisms, very long words.
//!
//! The overall score weighs them 40/30/30. Categories below 70 contribute
//! up to two suggestions each to the priority list, worst category first.

use std::collections::HashMap;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, MetricResult, Scale, TOO_SHORT_FEEDBACK};
use crate::syllables::count_syllables;
use crate::text;
use crate::word_lists::{
    COMPLEX_WORDS, IDIOMATIC_EXPRESSIONS, REGIONALISMS, TECHNICAL_TERMS, UNCLEAR_PRONOUNS,
};

/// Breakpoints for excellent, good and fair scores.
pub const BREAKPOINTS: [f64; 3] = [85.0, 70.0, 50.0];

/// Categories scoring below this feed the priority list.
pub const PRIORITY_THRESHOLD: f64 = 70.0;

/// Suggestions taken from each weak category.
const SUGGESTIONS_PER_CATEGORY: usize = 2;

/// Length of the priority list.
const MAX_PRIORITY_SUGGESTIONS: usize = 5;

/// Words above which a sentence or paragraph is long.
const LONG_SENTENCE_WORDS: usize = 20;
const LONG_PARAGRAPH_WORDS: usize = 150;

/// A heading (`#`), bullet (`-`, `*`, `•`) or numbered item at line start.
static STRUCTURE_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(#{1,6}\s|[-*•]\s|\d+[.)]\s)").expect("valid regex")
});

static IDIOM_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasickBuilder::new()
        .build(IDIOMATIC_EXPRESSIONS)
        .expect("valid idiom patterns")
});

/// Accessibility dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Mental effort to follow the text.
    Cognitive,
    /// Visual layout.
    Visual,
    /// Vocabulary.
    Linguistic,
}

impl Category {
    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cognitive => "Cognitiva",
            Self::Visual => "Visual",
            Self::Linguistic => "Linguística",
        }
    }
}

/// One accessibility sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryScore {
    /// Which dimension.
    pub category: Category,
    /// Score, 0–100, rounded.
    pub score: f64,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
    /// One suggestion per penalty applied, in detection order.
    pub suggestions: Vec<String>,
}

impl CategoryScore {
    fn not_applicable(category: Category) -> Self {
        Self {
            category,
            score: 0.0,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: TOO_SHORT_FEEDBACK.to_string(),
            suggestions: Vec::new(),
        }
    }

    fn from_penalties(category: Category, penalties: f64, suggestions: Vec<String>) -> Self {
        let score = (100.0 - penalties).clamp(0.0, 100.0).round();
        let level = Level::higher_is_better(score, BREAKPOINTS);
        let feedback = match level {
            Level::Excellent => format!("Acessibilidade {} excelente.", category.label().to_lowercase()),
            Level::Good => format!("Acessibilidade {} boa.", category.label().to_lowercase()),
            Level::Fair => format!("Acessibilidade {} regular: há pontos a melhorar.", category.label().to_lowercase()),
            _ => format!("Acessibilidade {} ruim: revise o texto.", category.label().to_lowercase()),
        };
        Self {
            category,
            score,
            level,
            label: Scale::Quality.label(level).to_string(),
            feedback,
            suggestions,
        }
    }
}

/// Accessibility scores and prioritized suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AccessibilityAnalysisResult {
    /// Weighted overall score.
    pub overall: MetricResult,
    /// Cognitive sub-score.
    pub cognitive: CategoryScore,
    /// Visual sub-score.
    pub visual: CategoryScore,
    /// Linguistic sub-score.
    pub linguistic: CategoryScore,
    /// Up to five suggestions, worst category first.
    pub priority_suggestions: Vec<String>,
}

impl AccessibilityAnalysisResult {
    /// The result for empty text.
    pub fn not_applicable() -> Self {
        Self {
            overall: MetricResult::too_short(),
            cognitive: CategoryScore::not_applicable(Category::Cognitive),
            visual: CategoryScore::not_applicable(Category::Visual),
            linguistic: CategoryScore::not_applicable(Category::Linguistic),
            priority_suggestions: Vec::new(),
        }
    }

    /// The three sub-scores.
    pub fn categories(&self) -> [&CategoryScore; 3] {
        [&self.cognitive, &self.visual, &self.linguistic]
    }
}

/// Accumulates capped penalties and their suggestions.
#[derive(Default)]
struct Penalties {
    total: f64,
    suggestions: Vec<String>,
}

impl Penalties {
    fn add(&mut self, amount: f64, cap: f64, suggestion: impl FnOnce() -> String) {
        let applied = amount.min(cap);
        if applied > 0.0 {
            self.total += applied;
            self.suggestions.push(suggestion());
        }
    }
}

fn cognitive(sentences: &[&str], words: &[String]) -> CategoryScore {
    let mut p = Penalties::default();
    let total = words.len() as f64;

    let long = sentences
        .iter()
        .filter(|s| text::count_words(s) > LONG_SENTENCE_WORDS)
        .count();
    p.add(5.0 * long as f64, 30.0, || {
        format!("Divida as {long} frase(s) com mais de {LONG_SENTENCE_WORDS} palavras.")
    });

    let complex = words
        .iter()
        .filter(|w| COMPLEX_WORDS.contains(w.as_str()) || count_syllables(w) > 3)
        .count();
    p.add(complex as f64 / total * 50.0, 25.0, || {
        format!("Troque palavras complexas por termos simples ({complex} encontradas).")
    });

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for w in words {
        *freq.entry(w.as_str()).or_default() += 1;
    }
    let hapax = freq.values().filter(|&&n| n == 1).count();
    p.add(hapax as f64 * 0.5, 20.0, || {
        "Mantenha a terminologia consistente ao longo do texto.".to_string()
    });

    let pronouns = words
        .iter()
        .filter(|w| UNCLEAR_PRONOUNS.contains(w.as_str()))
        .count();
    p.add(pronouns as f64 / total * 100.0 * 2.0, 25.0, || {
        "Substitua pronomes ambíguos (isso, ele, aquilo) pelo termo a que se referem.".to_string()
    });

    CategoryScore::from_penalties(Category::Cognitive, p.total, p.suggestions)
}

fn variance(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n
}

fn visual(text: &str, sentences: &[&str], word_count: usize) -> CategoryScore {
    let mut p = Penalties::default();
    let paragraphs = text::split_paragraphs(text);

    let long = paragraphs
        .iter()
        .filter(|para| text::count_words(para) > LONG_PARAGRAPH_WORDS)
        .count();
    p.add(10.0 * long as f64, 30.0, || {
        format!("Quebre os {long} parágrafo(s) com mais de {LONG_PARAGRAPH_WORDS} palavras.")
    });

    if paragraphs.len() > 3 && !STRUCTURE_MARKUP.is_match(text) {
        p.add(25.0, 25.0, || {
            "Use títulos e listas para organizar o conteúdo.".to_string()
        });
    }

    let lengths: Vec<usize> = sentences.iter().map(|s| text::count_words(s)).collect();
    if variance(&lengths) > 100.0 {
        p.add(20.0, 20.0, || {
            "Equilibre o tamanho das frases; a variação está muito alta.".to_string()
        });
    }

    if paragraphs.len() == 1 && word_count > LONG_PARAGRAPH_WORDS {
        p.add(25.0, 25.0, || {
            "Divida o bloco único de texto em parágrafos.".to_string()
        });
    }

    CategoryScore::from_penalties(Category::Visual, p.total, p.suggestions)
}

fn linguistic(lower: &str, words: &[String]) -> CategoryScore {
    let mut p = Penalties::default();
    let total = words.len() as f64;

    let technical = words
        .iter()
        .filter(|w| TECHNICAL_TERMS.contains(w.as_str()))
        .count();
    p.add(technical as f64 / total * 100.0 * 5.0, 25.0, || {
        format!("Explique ou substitua os {technical} termo(s) técnico(s).")
    });

    let idioms = IDIOM_MATCHER.find_iter(lower).count();
    p.add(5.0 * idioms as f64, 20.0, || {
        format!("Evite expressões idiomáticas ({idioms} encontradas).")
    });

    let regional = words
        .iter()
        .filter(|w| REGIONALISMS.contains(w.as_str()))
        .count();
    p.add(3.0 * regional as f64, 15.0, || {
        format!("Troque regionalismos ({regional}) por termos de uso geral.")
    });

    let long_words = words.iter().filter(|w| count_syllables(w) > 4).count();
    p.add(long_words as f64 / total * 100.0 * 2.0, 40.0, || {
        "Prefira palavras mais curtas a termos com muitas sílabas.".to_string()
    });

    CategoryScore::from_penalties(Category::Linguistic, p.total, p.suggestions)
}

fn priority_suggestions(categories: [&CategoryScore; 3]) -> Vec<String> {
    let mut ordered = categories.to_vec();
    ordered.sort_by(|a, b| a.score.total_cmp(&b.score));
    ordered
        .into_iter()
        .filter(|c| c.score < PRIORITY_THRESHOLD)
        .flat_map(|c| c.suggestions.iter().take(SUGGESTIONS_PER_CATEGORY).cloned())
        .take(MAX_PRIORITY_SUGGESTIONS)
        .collect()
}

/// Score the accessibility of `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn calculate_accessibility_metrics(text: &str) -> AccessibilityAnalysisResult {
    let words = text::normalized_words(text);
    if words.is_empty() {
        return AccessibilityAnalysisResult::not_applicable();
    }

    let sentences = text::split_sentences(text);
    let lower = text.to_lowercase();

    let cognitive = cognitive(&sentences, &words);
    let visual = visual(text, &sentences, text::count_words(text));
    let linguistic = linguistic(&lower, &words);

    let score = 0.3f64
        .mul_add(linguistic.score, 0.4f64.mul_add(cognitive.score, 0.3 * visual.score))
        .round();
    let level = Level::higher_is_better(score, BREAKPOINTS);
    let feedback = match level {
        Level::Excellent => format!("Acessibilidade geral {score}: texto acessível a quase todos."),
        Level::Good => format!("Acessibilidade geral {score}: boa, com ajustes pontuais."),
        Level::Fair => format!("Acessibilidade geral {score}: regular; siga as sugestões prioritárias."),
        _ => format!("Acessibilidade geral {score}: baixa; o texto exclui parte do público."),
    };

    let priority_suggestions = priority_suggestions([&cognitive, &visual, &linguistic]);
    tracing::debug!(
        cognitive = cognitive.score,
        visual = visual.score,
        linguistic = linguistic.score,
        overall = score,
        "accessibility scored"
    );

    AccessibilityAnalysisResult {
        overall: MetricResult::new(score, level, Scale::Quality, feedback),
        cognitive,
        visual,
        linguistic,
        priority_suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_not_applicable() {
        let r = calculate_accessibility_metrics("");
        assert_eq!(r, AccessibilityAnalysisResult::not_applicable());
    }

    #[test]
    fn scores_are_bounded() {
        let text = "Isso é aquilo. Ele disse isso a ela sobre aquele algoritmo de criptografia \
                    e o framework de middleware, uai, bah, tchê, que chutou o balde e pisou na bola.";
        let r = calculate_accessibility_metrics(text);
        for c in r.categories() {
            assert!((0.0..=100.0).contains(&c.score));
            assert_eq!(c.score, c.score.round());
        }
        assert!((0.0..=100.0).contains(&r.overall.score));
    }

    #[test]
    fn idioms_are_counted() {
        let r = calculate_accessibility_metrics("Ele resolveu chutar o balde e pagar o pato.");
        assert!(
            r.linguistic
                .suggestions
                .iter()
                .any(|s| s.contains("idiomáticas (2"))
        );
    }

    #[test]
    fn single_long_block_loses_visual_points() {
        let text = "Palavra simples aqui. ".repeat(60);
        let r = calculate_accessibility_metrics(&text);
        assert!(r.visual.score <= 75.0);
        assert!(r.visual.suggestions.iter().any(|s| s.contains("bloco único")));
    }

    #[test]
    fn markup_avoids_structure_penalty() {
        let plain = "Um dois.\n\nTrês quatro.\n\nCinco seis.\n\nSete oito.";
        let marked = "# Título\n\nUm dois.\n\n- Três quatro.\n\nCinco seis.\n\nSete oito.";
        let a = calculate_accessibility_metrics(plain);
        let b = calculate_accessibility_metrics(marked);
        assert!(a.visual.score < b.visual.score);
    }

    #[test]
    fn overall_is_weighted_average() {
        let r = calculate_accessibility_metrics("O gato dorme no sofá da sala.");
        let expected = 0.3f64
            .mul_add(
                r.linguistic.score,
                0.4f64.mul_add(r.cognitive.score, 0.3 * r.visual.score),
            )
            .round();
        assert_eq!(r.overall.score, expected);
    }

    #[test]
    fn priority_list_is_capped_and_ordered() {
        let low = |category, score: f64, n: usize| CategoryScore {
            category,
            score,
            level: Level::Poor,
            label: "Ruim".to_string(),
            feedback: String::new(),
            suggestions: (0..n).map(|i| format!("{}-{i}", category.label())).collect(),
        };
        let c = low(Category::Cognitive, 40.0, 4);
        let v = low(Category::Visual, 20.0, 3);
        let l = low(Category::Linguistic, 90.0, 3);
        let list = priority_suggestions([&c, &v, &l]);
        assert_eq!(list, vec!["Visual-0", "Visual-1", "Cognitiva-0", "Cognitiva-1"]);
    }

    #[test]
    fn variance_of_constant_lengths_is_zero() {
        assert_eq!(variance(&[5, 5, 5]), 0.0);
        assert_eq!(variance(&[]), 0.0);
    }
}
