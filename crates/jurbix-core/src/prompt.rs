//! Revision prompt assembly.
//!
//! Turns every finding for a view into a single block of instructions that
//! can be handed to a generative text tool. Pure templating: nothing here
//! talks to the network.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::advanced::AdvancedMetricsData;
use crate::analysis::basic::calculate_basic_metrics;
use crate::findings::{AnalysisView, FindingArea, basic_findings, collect_findings};
use crate::profiles::ThresholdConfig;
use crate::seo::SeoAnalysisResult;
use crate::style::StyleAnalysisData;

/// An assembled prompt and the findings it lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AiPrompt {
    /// The full prompt text, including the original text.
    pub prompt: String,
    /// The finding messages included, in prompt order.
    pub included_feedbacks: Vec<String>,
}

/// Build a revision prompt listing every below-threshold finding for `view`.
#[tracing::instrument(skip_all, fields(view = %view, text_len = text.len()))]
pub fn generate_ai_prompt(
    text: &str,
    view: AnalysisView,
    advanced: &AdvancedMetricsData,
    style: &StyleAnalysisData,
    seo: &SeoAnalysisResult,
    thresholds: &ThresholdConfig,
) -> AiPrompt {
    let mut findings = Vec::new();
    if view.includes(FindingArea::Legibilidade) {
        findings.extend(basic_findings(&calculate_basic_metrics(text), thresholds));
    }
    findings.extend(collect_findings(view, advanced, style, seo, thresholds));

    let included_feedbacks: Vec<String> = findings.into_iter().map(|f| f.message).collect();

    let mut prompt = String::from(
        "Você é um editor especializado em textos em português do Brasil.\n",
    );
    if included_feedbacks.is_empty() {
        prompt.push_str(&format!(
            "O texto abaixo já atende aos critérios de {view}. Sugira apenas ajustes finos de clareza, sem mudar o conteúdo.\n"
        ));
    } else {
        prompt.push_str(&format!(
            "Revise o texto abaixo com foco em {view}, corrigindo os seguintes pontos:\n\n"
        ));
        for (i, feedback) in included_feedbacks.iter().enumerate() {
            prompt.push_str(&format!("{}. {feedback}\n", i + 1));
        }
        prompt.push_str("\nMantenha o sentido original e o tom do autor. Devolva apenas o texto revisado.\n");
    }
    prompt.push_str("\nTexto:\n\"\"\"\n");
    prompt.push_str(text.trim());
    prompt.push_str("\n\"\"\"\n");

    tracing::debug!(findings = included_feedbacks.len(), "prompt assembled");
    AiPrompt {
        prompt,
        included_feedbacks,
    }
}
