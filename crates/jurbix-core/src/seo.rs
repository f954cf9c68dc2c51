//! SEO signals.
//!
//! Five independent dimensions, with no composite score:
//!
//! - main keyword: most frequent non-stop-word of three or more characters
//!   (first occurrence wins ties), with its density;
//! - LSI density: the keyword plus its registered synonyms;
//! - structure: short unpunctuated lines that look like headings;
//! - readability: Flesch Reading Ease, good inside `[60, 90]`;
//! - length: word count, adequate between 300 and 2000.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{Level, MetricResult, Scale, TOO_SHORT_FEEDBACK, percent, round1};
use crate::readability::{TextStats, flesch_reading_ease};
use crate::text;
use crate::word_lists::{LSI_SYNONYMS, STOP_WORDS};

/// Keyword density window (%).
pub const KEYWORD_DENSITY_RANGE: (f64, f64) = (1.0, 2.5);

/// LSI density window (%).
pub const LSI_DENSITY_RANGE: (f64, f64) = (1.0, 2.0);

/// Flesch window considered good for search.
pub const SEO_FLESCH_RANGE: (f64, f64) = (60.0, 90.0);

/// Word-count window considered adequate.
pub const SEO_LENGTH_RANGE: (usize, usize) = (300, 2000);

/// Lines at or above this length are never headings.
const MAX_HEADING_CHARS: usize = 60;

/// Main keyword and its density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordAnalysis {
    /// The most frequent content word, if any.
    pub keyword: Option<String>,
    /// Occurrences of the keyword.
    pub occurrences: usize,
    /// Occurrences as a percentage of all words.
    pub density: f64,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
}

/// Density of the keyword plus its synonyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LsiAnalysis {
    /// The main keyword the synonyms are keyed by.
    pub keyword: Option<String>,
    /// Registered synonyms that appear in the text.
    pub synonyms_found: Vec<String>,
    /// Occurrences of the keyword and its synonyms.
    pub occurrences: usize,
    /// Occurrences as a percentage of all words.
    pub density: f64,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
}

/// Heading-like lines detected in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructureAnalysis {
    /// Whether at least one potential heading was found.
    pub has_structure: bool,
    /// The potential headings, trimmed, in text order.
    pub headings: Vec<String>,
    /// Paragraph count.
    pub paragraphs: usize,
    /// Qualitative level.
    pub level: Level,
    /// Display label.
    pub label: String,
    /// Human-readable feedback.
    pub feedback: String,
}

/// Every SEO dimension for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeoAnalysisResult {
    /// Main keyword.
    pub keyword: KeywordAnalysis,
    /// LSI density.
    pub lsi: LsiAnalysis,
    /// Heading structure.
    pub structure: StructureAnalysis,
    /// Flesch score judged for search.
    pub readability: MetricResult,
    /// Word count judged for search.
    pub length: MetricResult,
}

/// Most frequent non-stop-word with at least three characters.
///
/// Ties go to the word that appears first.
pub fn main_keyword(words: &[String]) -> Option<(String, usize)> {
    let mut freq: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, w) in words.iter().enumerate() {
        if w.chars().count() < 3 || STOP_WORDS.contains(w.as_str()) {
            continue;
        }
        freq.entry(w.as_str()).or_insert((0, pos)).0 += 1;
    }
    freq.into_iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
        .map(|(w, (n, _))| (w.to_string(), n))
}

fn analyze_keyword(words: &[String], total: usize) -> KeywordAnalysis {
    let Some((keyword, occurrences)) = main_keyword(words) else {
        return KeywordAnalysis {
            keyword: None,
            occurrences: 0,
            density: 0.0,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: "Nenhuma palavra-chave identificada.".to_string(),
        };
    };

    let ratio = percent(occurrences, total);
    let density = round1(ratio);
    let (min, max) = KEYWORD_DENSITY_RANGE;
    let (level, feedback) = if ratio < min {
        (
            Level::Fair,
            format!("Palavra-chave \"{keyword}\" com densidade baixa ({density}%): use-a mais vezes."),
        )
    } else if ratio > max {
        (
            Level::Poor,
            format!("Palavra-chave \"{keyword}\" com densidade alta ({density}%): evite repetição excessiva."),
        )
    } else {
        (
            Level::Good,
            format!("Palavra-chave \"{keyword}\" com densidade adequada ({density}%)."),
        )
    };

    KeywordAnalysis {
        keyword: Some(keyword),
        occurrences,
        density,
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
    }
}

fn analyze_lsi(words: &[String], total: usize, keyword: Option<&str>) -> LsiAnalysis {
    let Some(keyword) = keyword else {
        return LsiAnalysis {
            keyword: None,
            synonyms_found: Vec::new(),
            occurrences: 0,
            density: 0.0,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: "Sem palavra-chave para avaliar termos relacionados.".to_string(),
        };
    };

    let synonyms: &[&str] = LSI_SYNONYMS.get(keyword).copied().unwrap_or_default();
    let mut occurrences = 0;
    let mut synonyms_found: Vec<String> = Vec::new();
    for w in words {
        if w == keyword {
            occurrences += 1;
        } else if synonyms.contains(&w.as_str()) {
            occurrences += 1;
            if !synonyms_found.contains(w) {
                synonyms_found.push(w.clone());
            }
        }
    }

    let ratio = percent(occurrences, total);
    let density = round1(ratio);
    let (min, max) = LSI_DENSITY_RANGE;
    let (level, feedback) = if ratio < min {
        (
            Level::Fair,
            format!("Densidade LSI baixa ({density}%): inclua sinônimos de \"{keyword}\"."),
        )
    } else if ratio > max {
        (
            Level::Poor,
            format!("Densidade LSI alta ({density}%): o tema está repetitivo."),
        )
    } else {
        (
            Level::Good,
            format!("Densidade LSI adequada ({density}%)."),
        )
    };

    LsiAnalysis {
        keyword: Some(keyword.to_string()),
        synonyms_found,
        occurrences,
        density,
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
    }
}

fn ends_with_punctuation(line: &str) -> bool {
    line.ends_with(['.', '!', '?', ':', ';', ','])
}

/// Short, unpunctuated lines followed by a longer line or by a blank line
/// and more content.
pub fn potential_headings(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut headings = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if line.is_empty() || len >= MAX_HEADING_CHARS || ends_with_punctuation(line) {
            continue;
        }
        let next = lines.get(i + 1).copied().unwrap_or_default();
        let followed_by_longer = next.chars().count() > len;
        let followed_by_section = next.is_empty()
            && lines
                .get(i + 2)
                .is_some_and(|after| !after.is_empty());
        if followed_by_longer || followed_by_section {
            headings.push((*line).to_string());
        }
    }
    headings
}

fn analyze_structure(text: &str) -> StructureAnalysis {
    if text.trim().is_empty() {
        return StructureAnalysis {
            has_structure: false,
            headings: Vec::new(),
            paragraphs: 0,
            level: Level::NotApplicable,
            label: Scale::Quality.label(Level::NotApplicable).to_string(),
            feedback: TOO_SHORT_FEEDBACK.to_string(),
        };
    }

    let headings = potential_headings(text);
    let paragraphs = text::count_paragraphs(text);

    let (level, feedback) = if headings.len() > 1 && paragraphs > headings.len() {
        (Level::Good, format!("Boa estrutura: {} possíveis títulos.", headings.len()))
    } else if headings.is_empty() {
        (
            Level::Poor,
            "Nenhum título identificado: divida o texto em seções com subtítulos.".to_string(),
        )
    } else {
        (
            Level::Fair,
            "Estrutura parcial: adicione mais subtítulos para organizar o conteúdo.".to_string(),
        )
    };

    StructureAnalysis {
        has_structure: !headings.is_empty(),
        headings,
        paragraphs,
        level,
        label: Scale::Quality.label(level).to_string(),
        feedback,
    }
}

fn analyze_seo_readability(text: &str) -> MetricResult {
    let stats = TextStats::from_text(text);
    if !stats.is_scorable() {
        return MetricResult::too_short();
    }
    let score = round1(flesch_reading_ease(&stats));
    let (min, max) = SEO_FLESCH_RANGE;
    if (min..=max).contains(&score) {
        MetricResult::new(
            score,
            Level::Good,
            Scale::Quality,
            format!("Flesch {score}: leitura adequada para a web."),
        )
    } else if score < min {
        MetricResult::new(
            score,
            Level::Fair,
            Scale::Quality,
            format!("Flesch {score}: texto difícil para leitores da web; simplifique."),
        )
    } else {
        MetricResult::new(
            score,
            Level::Fair,
            Scale::Quality,
            format!("Flesch {score}: texto simples demais; aprofunde o conteúdo."),
        )
    }
}

fn analyze_length(words: usize) -> MetricResult {
    if words == 0 {
        return MetricResult::too_short();
    }
    let (min, max) = SEO_LENGTH_RANGE;
    let score = words as f64;
    if words < min {
        MetricResult::new(
            score,
            Level::Fair,
            Scale::Quality,
            format!("Texto curto para SEO ({words} palavras): busque pelo menos {min}."),
        )
    } else if words <= max {
        MetricResult::new(
            score,
            Level::Good,
            Scale::Quality,
            format!("Tamanho adequado para SEO ({words} palavras)."),
        )
    } else {
        MetricResult::new(
            score,
            Level::Fair,
            Scale::Quality,
            format!("Texto longo ({words} palavras): considere dividir em mais de uma página."),
        )
    }
}

/// Analyze the SEO signals of `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_seo(text: &str) -> SeoAnalysisResult {
    let words = text::normalized_words(text);
    let total = text::count_words(text);

    let keyword = analyze_keyword(&words, total);
    let lsi = analyze_lsi(&words, total, keyword.keyword.as_deref());
    let structure = analyze_structure(text);
    tracing::debug!(
        keyword = ?keyword.keyword,
        headings = structure.headings.len(),
        "seo analyzed"
    );

    SeoAnalysisResult {
        keyword,
        lsi,
        structure,
        readability: analyze_seo_readability(text),
        length: analyze_length(total),
    }
}
