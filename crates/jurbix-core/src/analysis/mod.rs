//! Text analysis orchestration.
//!
//! [`run_full_analysis`] runs the selected analyzers over one text and
//! collects their results in a [`FullAnalysisReport`]. Each analyzer is a
//! pure function and can also be called on its own.

pub mod advanced;
pub mod basic;
pub mod redundancy;
pub mod sentiment;

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::accessibility::{AccessibilityAnalysisResult, calculate_accessibility_metrics};
use crate::error::{AnalysisError, AnalysisResult};
use crate::findings::{self, AnalysisView, Finding, FindingArea};
use crate::lexicon::Lexicon;
use crate::profiles::ThresholdConfig;
use crate::prompt::{AiPrompt, generate_ai_prompt};
use crate::seo::{SeoAnalysisResult, analyze_seo};
use crate::style::{StyleAnalysisData, perform_style_analysis};

pub use advanced::{AdvancedMetricsData, calculate_advanced_metrics, empty_advanced_metrics};
pub use basic::{BasicMetricsData, calculate_basic_metrics};

/// All available check names.
pub const ALL_CHECKS: &[&str] = &["basic", "advanced", "style", "accessibility", "seo"];

/// Results of every analyzer that ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FullAnalysisReport {
    /// Counts and averages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicMetricsData>,
    /// Readability, redundancy and sentiment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedMetricsData>,
    /// Style checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleAnalysisData>,
    /// Accessibility scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityAnalysisResult>,
    /// SEO signals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoAnalysisResult>,
}

impl FullAnalysisReport {
    /// Every finding for `view` from the analyzers that ran.
    ///
    /// Accessibility findings only appear in the general view.
    pub fn findings(&self, view: AnalysisView, thresholds: &ThresholdConfig) -> Vec<Finding> {
        let mut out = Vec::new();
        if view.includes(FindingArea::Legibilidade)
            && let Some(ref basic) = self.basic
        {
            out.extend(findings::basic_findings(basic, thresholds));
        }
        if let (Some(advanced), Some(style), Some(seo)) = (&self.advanced, &self.style, &self.seo) {
            out.extend(findings::collect_findings(view, advanced, style, seo, thresholds));
        }
        if view.includes(FindingArea::Acessibilidade)
            && let Some(ref accessibility) = self.accessibility
        {
            out.extend(findings::accessibility_findings(accessibility, thresholds));
        }
        out
    }

    /// Build a revision prompt from this report.
    ///
    /// Returns `None` unless the advanced, style and SEO analyzers all ran.
    pub fn prompt(
        &self,
        text: &str,
        view: AnalysisView,
        thresholds: &ThresholdConfig,
    ) -> Option<AiPrompt> {
        let (advanced, style, seo) = (self.advanced.as_ref()?, self.style.as_ref()?, self.seo.as_ref()?);
        Some(generate_ai_prompt(text, view, advanced, style, seo, thresholds))
    }
}

/// Reject text larger than `max_bytes`.
pub fn check_input_size(text: &str, max_bytes: Option<usize>) -> AnalysisResult<()> {
    match max_bytes {
        Some(limit) if text.len() > limit => Err(AnalysisError::InputTooLarge {
            size: text.len(),
            limit,
        }),
        _ => Ok(()),
    }
}

/// Run the selected analyzers over `text`.
///
/// # Arguments
///
/// * `text`: The text to analyze. Empty text is valid and yields `N/A` results.
/// * `lexicon`: Sentiment lexicon.
/// * `checks`: Optional list of check names to run. If `None`, runs all.
#[tracing::instrument(skip(text, lexicon), fields(text_len = text.len()))]
pub fn run_full_analysis(
    text: &str,
    lexicon: &Lexicon,
    checks: Option<&[String]>,
) -> AnalysisResult<FullAnalysisReport> {
    if let Some(list) = checks
        && let Some(unknown) = list.iter().find(|c| !ALL_CHECKS.contains(&c.as_str()))
    {
        return Err(AnalysisError::UnknownCheck(unknown.clone()));
    }

    let enabled: HashSet<&str> = checks.map_or_else(
        || ALL_CHECKS.iter().copied().collect(),
        |list| list.iter().map(String::as_str).collect(),
    );

    let report = FullAnalysisReport {
        basic: enabled
            .contains("basic")
            .then(|| calculate_basic_metrics(text)),
        advanced: enabled
            .contains("advanced")
            .then(|| calculate_advanced_metrics(text, lexicon)),
        style: enabled
            .contains("style")
            .then(|| perform_style_analysis(text)),
        accessibility: enabled
            .contains("accessibility")
            .then(|| calculate_accessibility_metrics(text)),
        seo: enabled.contains("seo").then(|| analyze_seo(text)),
    };
    tracing::info!(checks = enabled.len(), "analysis complete");
    Ok(report)
}
