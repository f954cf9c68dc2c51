//! Judging analysis results against a profile.
//!
//! A [`Finding`] is one metric on the wrong side of a threshold. Readability,
//! redundancy, sentiment, style percentages, accessibility and SEO are judged
//! against the active [`ThresholdConfig`]. Discourse connectors and lexical
//! diversity are judged by their own levels: the equivalent profile fields
//! exist but are not consulted.
//!
//! Metrics whose level is `N/A` never produce findings.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::accessibility::AccessibilityAnalysisResult;
use crate::analysis::advanced::AdvancedMetricsData;
use crate::analysis::basic::BasicMetricsData;
use crate::level::{Level, MetricResult};
use crate::profiles::ThresholdConfig;
use crate::readability::ReadabilityIndex;
use crate::seo::SeoAnalysisResult;
use crate::style::StyleAnalysisData;

/// Which slice of the analysis the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AnalysisView {
    /// Everything.
    #[default]
    Geral,
    /// Readability, redundancy, sentiment and text shape.
    Legibilidade,
    /// Style checks.
    Estilo,
    /// SEO signals.
    Seo,
}

impl AnalysisView {
    /// Whether findings from `area` belong in this view.
    pub const fn includes(self, area: FindingArea) -> bool {
        match self {
            Self::Geral => true,
            Self::Legibilidade => matches!(area, FindingArea::Legibilidade),
            Self::Estilo => matches!(area, FindingArea::Estilo),
            Self::Seo => matches!(area, FindingArea::Seo),
        }
    }

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Geral => "geral",
            Self::Legibilidade => "legibilidade",
            Self::Estilo => "estilo",
            Self::Seo => "SEO",
        }
    }
}

impl fmt::Display for AnalysisView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The analysis area a finding comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FindingArea {
    /// Readability, redundancy, sentiment, sentence and paragraph length.
    Legibilidade,
    /// Style checks.
    Estilo,
    /// Accessibility scores.
    Acessibilidade,
    /// SEO signals.
    Seo,
}

/// One metric outside its acceptable range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Area the metric belongs to.
    pub area: FindingArea,
    /// Metric identifier (e.g. `passive_voice`).
    pub metric: String,
    /// Observed value.
    pub value: f64,
    /// Threshold that was crossed, when the judgment is threshold-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    fn new(
        area: FindingArea,
        metric: impl Into<String>,
        value: f64,
        limit: Option<f64>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            area,
            metric: metric.into(),
            value,
            limit,
            message: message.into(),
        }
    }
}

fn scored(result: &MetricResult) -> bool {
    result.level != Level::NotApplicable
}

fn readability_findings(advanced: &AdvancedMetricsData, t: &ThresholdConfig, out: &mut Vec<Finding>) {
    for (index, result) in advanced.readability.iter() {
        if !scored(result) {
            continue;
        }
        let (limit, crossed) = match index {
            ReadabilityIndex::FleschReadingEase => {
                (t.min_flesch_ease, result.score < t.min_flesch_ease)
            }
            ReadabilityIndex::Gulpease => (t.min_gulpease, result.score < t.min_gulpease),
            ReadabilityIndex::Jurbix => (t.min_jurbix, result.score < t.min_jurbix),
            ReadabilityIndex::GunningFog => (t.max_gunning_fog, result.score > t.max_gunning_fog),
            ReadabilityIndex::Smog => (t.max_smog, result.score > t.max_smog),
            ReadabilityIndex::ColemanLiau => (t.max_coleman_liau, result.score > t.max_coleman_liau),
        };
        if crossed {
            let bound = if index.higher_is_easier() { "mínimo" } else { "máximo" };
            out.push(Finding::new(
                FindingArea::Legibilidade,
                index.id(),
                result.score,
                Some(limit),
                format!("{}: {} ({bound} do perfil: {limit}).", index.label(), result.score),
            ));
        }
    }

    let redundancy = &advanced.redundancy;
    if scored(redundancy) && redundancy.score > t.max_redundancy_percent {
        out.push(Finding::new(
            FindingArea::Legibilidade,
            "redundancy",
            redundancy.score,
            Some(t.max_redundancy_percent),
            redundancy.feedback.clone(),
        ));
    }

    let sentiment = &advanced.sentiment;
    if sentiment.neu == 0.0 && sentiment.compound < t.min_sentiment_compound {
        out.push(Finding::new(
            FindingArea::Legibilidade,
            "sentiment",
            sentiment.compound,
            Some(t.min_sentiment_compound),
            format!(
                "Tom {} abaixo do esperado para o perfil (compound {:.2}).",
                sentiment.sentiment.label(),
                sentiment.compound
            ),
        ));
    }
}

fn style_findings(style: &StyleAnalysisData, t: &ThresholdConfig, out: &mut Vec<Finding>) {
    let passive = &style.passive_voice;
    if passive.level != Level::NotApplicable && passive.percentage > t.max_passive_voice_percent {
        out.push(Finding::new(
            FindingArea::Estilo,
            "passive_voice",
            passive.percentage,
            Some(t.max_passive_voice_percent),
            passive.feedback.clone(),
        ));
    }

    let adverbs = &style.adverbs;
    if adverbs.level != Level::NotApplicable && adverbs.percentage > t.max_adverb_percent {
        out.push(Finding::new(
            FindingArea::Estilo,
            "adverbs",
            adverbs.percentage,
            Some(t.max_adverb_percent),
            adverbs.feedback.clone(),
        ));
    }

    let complex = &style.complex_sentences;
    if complex.level != Level::NotApplicable
        && complex.percentage > t.max_complex_sentence_percent
    {
        out.push(Finding::new(
            FindingArea::Estilo,
            "complex_sentences",
            complex.percentage,
            Some(t.max_complex_sentence_percent),
            complex.feedback.clone(),
        ));
    }

    let connectors = &style.connectors;
    if connectors.level.is_problem() {
        out.push(Finding::new(
            FindingArea::Estilo,
            "connectors",
            connectors.percentage,
            None,
            connectors.feedback.clone(),
        ));
    }

    let diversity = &style.lexical_diversity;
    if diversity.level.is_problem() {
        out.push(Finding::new(
            FindingArea::Estilo,
            "lexical_diversity",
            diversity.shannon_index,
            None,
            diversity.feedback.clone(),
        ));
    }
}

fn seo_findings(seo: &SeoAnalysisResult, t: &ThresholdConfig, out: &mut Vec<Finding>) {
    if let Some(ref keyword) = seo.keyword.keyword {
        let density = seo.keyword.density;
        if density < t.min_keyword_density || density > t.max_keyword_density {
            let limit = if density < t.min_keyword_density {
                t.min_keyword_density
            } else {
                t.max_keyword_density
            };
            out.push(Finding::new(
                FindingArea::Seo,
                "keyword_density",
                density,
                Some(limit),
                format!(
                    "Densidade da palavra-chave \"{keyword}\" em {density}% (ideal entre {}% e {}%).",
                    t.min_keyword_density, t.max_keyword_density
                ),
            ));
        }

        let lsi = seo.lsi.density;
        if lsi < t.min_lsi_density || lsi > t.max_lsi_density {
            let limit = if lsi < t.min_lsi_density {
                t.min_lsi_density
            } else {
                t.max_lsi_density
            };
            out.push(Finding::new(
                FindingArea::Seo,
                "lsi_density",
                lsi,
                Some(limit),
                seo.lsi.feedback.clone(),
            ));
        }
    }

    let headings = seo.structure.headings.len();
    if seo.structure.level != Level::NotApplicable && headings < t.min_headings {
        out.push(Finding::new(
            FindingArea::Seo,
            "headings",
            headings as f64,
            Some(t.min_headings as f64),
            format!(
                "{headings} título(s) identificado(s); o perfil pede pelo menos {}.",
                t.min_headings
            ),
        ));
    }

    let flesch = &seo.readability;
    if scored(flesch) && (flesch.score < t.seo_min_flesch || flesch.score > t.seo_max_flesch) {
        let limit = if flesch.score < t.seo_min_flesch {
            t.seo_min_flesch
        } else {
            t.seo_max_flesch
        };
        out.push(Finding::new(
            FindingArea::Seo,
            "seo_readability",
            flesch.score,
            Some(limit),
            flesch.feedback.clone(),
        ));
    }

    let length = &seo.length;
    if scored(length) {
        let words = length.score;
        let min = t.min_word_count as f64;
        let max = t.max_word_count as f64;
        if words < min || words > max {
            out.push(Finding::new(
                FindingArea::Seo,
                "word_count",
                words,
                Some(if words < min { min } else { max }),
                format!(
                    "{words} palavras; o perfil pede entre {} e {}.",
                    t.min_word_count, t.max_word_count
                ),
            ));
        }
    }
}

/// Findings from readability, style and SEO results for the requested view.
#[tracing::instrument(skip_all, fields(view = %view))]
pub fn collect_findings(
    view: AnalysisView,
    advanced: &AdvancedMetricsData,
    style: &StyleAnalysisData,
    seo: &SeoAnalysisResult,
    thresholds: &ThresholdConfig,
) -> Vec<Finding> {
    let mut out = Vec::new();
    if view.includes(FindingArea::Legibilidade) {
        readability_findings(advanced, thresholds, &mut out);
    }
    if view.includes(FindingArea::Estilo) {
        style_findings(style, thresholds, &mut out);
    }
    if view.includes(FindingArea::Seo) {
        seo_findings(seo, thresholds, &mut out);
    }
    tracing::debug!(count = out.len(), "findings collected");
    out
}

/// Findings on sentence and paragraph length.
pub fn basic_findings(basic: &BasicMetricsData, thresholds: &ThresholdConfig) -> Vec<Finding> {
    let mut out = Vec::new();
    if basic.avg_words_per_sentence > thresholds.max_words_per_sentence {
        out.push(Finding::new(
            FindingArea::Legibilidade,
            "words_per_sentence",
            basic.avg_words_per_sentence,
            Some(thresholds.max_words_per_sentence),
            format!(
                "Média de {} palavras por frase (máximo do perfil: {}).",
                basic.avg_words_per_sentence, thresholds.max_words_per_sentence
            ),
        ));
    }
    if basic.paragraphs > 0 {
        let per_paragraph = crate::level::round1(basic.words as f64 / basic.paragraphs as f64);
        if per_paragraph > thresholds.max_words_per_paragraph {
            out.push(Finding::new(
                FindingArea::Legibilidade,
                "words_per_paragraph",
                per_paragraph,
                Some(thresholds.max_words_per_paragraph),
                format!(
                    "Média de {per_paragraph} palavras por parágrafo (máximo do perfil: {}).",
                    thresholds.max_words_per_paragraph
                ),
            ));
        }
    }
    out
}

/// Findings on the accessibility scores.
pub fn accessibility_findings(
    result: &AccessibilityAnalysisResult,
    thresholds: &ThresholdConfig,
) -> Vec<Finding> {
    if result.overall.level == Level::NotApplicable {
        return Vec::new();
    }

    let mut out = Vec::new();
    let checks = [
        ("accessibility", result.overall.score, thresholds.min_accessibility_score, &result.overall.feedback),
        ("cognitive", result.cognitive.score, thresholds.min_cognitive_score, &result.cognitive.feedback),
        ("visual", result.visual.score, thresholds.min_visual_score, &result.visual.feedback),
        ("linguistic", result.linguistic.score, thresholds.min_linguistic_score, &result.linguistic.feedback),
    ];
    for (metric, score, min, feedback) in checks {
        if score < min {
            out.push(Finding::new(
                FindingArea::Acessibilidade,
                metric,
                score,
                Some(min),
                feedback.clone(),
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::calculate_accessibility_metrics;
    use crate::analysis::advanced::calculate_advanced_metrics;
    use crate::analysis::basic::calculate_basic_metrics;
    use crate::lexicon::Lexicon;
    use crate::seo::analyze_seo;
    use crate::style::perform_style_analysis;

    fn findings_for(text: &str, view: AnalysisView) -> Vec<Finding> {
        let advanced = calculate_advanced_metrics(text, &Lexicon::builtin());
        let style = perform_style_analysis(text);
        let seo = analyze_seo(text);
        collect_findings(view, &advanced, &style, &seo, &ThresholdConfig::default())
    }

    #[test]
    fn passive_sentence_is_a_style_finding() {
        let f = findings_for("O relatório foi escrito pelo gerente.", AnalysisView::Estilo);
        assert!(f.iter().any(|f| f.metric == "passive_voice"));
        assert!(f.iter().all(|f| f.area == FindingArea::Estilo));
    }

    #[test]
    fn views_filter_areas() {
        let text = "O relatório foi escrito pelo gerente.";
        let seo = findings_for(text, AnalysisView::Seo);
        assert!(seo.iter().all(|f| f.area == FindingArea::Seo));
        assert!(seo.iter().any(|f| f.metric == "word_count"));

        let all = findings_for(text, AnalysisView::Geral);
        assert!(all.len() >= seo.len());
    }

    #[test]
    fn empty_text_has_no_findings() {
        assert!(findings_for("", AnalysisView::Geral).is_empty());
        assert!(findings_for("  \n\n ", AnalysisView::Seo).is_empty());
    }

    #[test]
    fn profile_changes_judgment() {
        let text = "O relatório foi escrito pelo gerente. A equipe revisou tudo. O cliente aprovou.";
        let style = perform_style_analysis(text);
        let advanced = calculate_advanced_metrics(text, &Lexicon::builtin());
        let seo = analyze_seo(text);
        let strict = ThresholdConfig::default();
        let lenient = ThresholdConfig {
            max_passive_voice_percent: 50.0,
            ..ThresholdConfig::default()
        };
        let has_passive = |t: &ThresholdConfig| {
            collect_findings(AnalysisView::Estilo, &advanced, &style, &seo, t)
                .iter()
                .any(|f| f.metric == "passive_voice")
        };
        assert!(has_passive(&strict));
        assert!(!has_passive(&lenient));
    }

    #[test]
    fn long_sentences_are_basic_findings() {
        let text = format!("{}.", ["palavra"; 30].join(" "));
        let f = basic_findings(&calculate_basic_metrics(&text), &ThresholdConfig::default());
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].metric, "words_per_sentence");
    }

    #[test]
    fn accessibility_findings_skip_empty_text() {
        let r = calculate_accessibility_metrics("");
        assert!(accessibility_findings(&r, &ThresholdConfig::default()).is_empty());
    }
}
