//! Qualitative levels and the generic metric result shape.
//!
//! Every analyzer classifies a numeric score into a [`Level`] by comparing it
//! against ordered breakpoints. The human label for a level depends on the
//! [`Scale`] in use: quality metrics read "Excelente/Bom/Regular/Ruim", ease
//! metrics read "Muito Fácil/Fácil/Médio/Difícil".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Feedback used by every analyzer when the text is too short to score.
pub const TOO_SHORT_FEEDBACK: &str = "Texto muito curto para análise.";

/// Qualitative level of a metric, ordered from worst to best.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Not enough text to compute the metric.
    NotApplicable,
    /// Worst tier.
    Poor,
    /// Middle tier.
    Fair,
    /// Acceptable tier.
    Good,
    /// Best tier.
    Excellent,
}

impl Level {
    /// Classify a score where higher is better.
    ///
    /// `breakpoints` are the minimum scores for excellent, good and fair.
    pub fn higher_is_better(score: f64, breakpoints: [f64; 3]) -> Self {
        let [excellent, good, fair] = breakpoints;
        if score >= excellent {
            Self::Excellent
        } else if score >= good {
            Self::Good
        } else if score >= fair {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Classify a score where lower is better.
    ///
    /// `breakpoints` are the maximum scores for excellent, good and fair.
    pub fn lower_is_better(score: f64, breakpoints: [f64; 3]) -> Self {
        let [excellent, good, fair] = breakpoints;
        if score <= excellent {
            Self::Excellent
        } else if score <= good {
            Self::Good
        } else if score <= fair {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Whether the level signals a problem worth reporting.
    pub const fn is_problem(self) -> bool {
        matches!(self, Self::Poor | Self::Fair)
    }
}

/// Label vocabulary for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Excelente / Bom / Regular / Ruim.
    Quality,
    /// Muito Fácil / Fácil / Médio / Difícil.
    Ease,
}

impl Scale {
    /// Human label for `level` on this scale.
    pub const fn label(self, level: Level) -> &'static str {
        match (self, level) {
            (_, Level::NotApplicable) => "N/A",
            (Self::Quality, Level::Excellent) => "Excelente",
            (Self::Quality, Level::Good) => "Bom",
            (Self::Quality, Level::Fair) => "Regular",
            (Self::Quality, Level::Poor) => "Ruim",
            (Self::Ease, Level::Excellent) => "Muito Fácil",
            (Self::Ease, Level::Good) => "Fácil",
            (Self::Ease, Level::Fair) => "Médio",
            (Self::Ease, Level::Poor) => "Difícil",
        }
    }
}

/// Generic `{score, level, feedback}` result shared across analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricResult {
    /// Numeric score.
    pub score: f64,
    /// Qualitative level derived from `score`.
    pub level: Level,
    /// Display label for `level`.
    pub label: String,
    /// Human-readable feedback derived from `score` and `level`.
    pub feedback: String,
}

impl MetricResult {
    /// Build a result, deriving the label from `scale`.
    pub fn new(score: f64, level: Level, scale: Scale, feedback: impl Into<String>) -> Self {
        Self {
            score,
            level,
            label: scale.label(level).to_string(),
            feedback: feedback.into(),
        }
    }

    /// The `N/A` result: score 0 with the given placeholder feedback.
    pub fn not_applicable(feedback: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            level: Level::NotApplicable,
            label: "N/A".to_string(),
            feedback: feedback.into(),
        }
    }

    /// The `N/A` result with the standard "too short" feedback.
    pub fn too_short() -> Self {
        Self::not_applicable(TOO_SHORT_FEEDBACK)
    }
}

/// Round to one decimal place.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// `part` as a percentage of `whole`, unrounded. 0 when `whole` is 0.
///
/// Levels are decided on this value; only the reported figure is rounded.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Round to three decimal places.
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
