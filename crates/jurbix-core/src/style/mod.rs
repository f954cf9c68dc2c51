//! Style analysis.
//!
//! Five independent checks, each in its own module, combined by
//! [`perform_style_analysis`]. Callers can also invoke the checks
//! individually.

pub mod adverbs;
pub mod complex_sentences;
pub mod connectors;
pub mod diversity;
pub mod passive_voice;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use adverbs::{AdverbResult, analyze_adverbs};
pub use complex_sentences::{ComplexSentence, ComplexSentenceResult, analyze_complex_sentences};
pub use connectors::{ConnectorResult, analyze_discourse_connectors};
pub use diversity::{LexicalDiversityResult, analyze_lexical_diversity};
pub use passive_voice::{PassiveVoiceMatch, PassiveVoiceResult, analyze_passive_voice};

/// Every style check for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleAnalysisData {
    /// Passive voice.
    pub passive_voice: PassiveVoiceResult,
    /// Adverb density.
    pub adverbs: AdverbResult,
    /// Long sentences.
    pub complex_sentences: ComplexSentenceResult,
    /// Discourse connectors.
    pub connectors: ConnectorResult,
    /// Lexical diversity.
    pub lexical_diversity: LexicalDiversityResult,
}

/// Run every style check on `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn perform_style_analysis(text: &str) -> StyleAnalysisData {
    let data = StyleAnalysisData {
        passive_voice: analyze_passive_voice(text),
        adverbs: analyze_adverbs(text),
        complex_sentences: analyze_complex_sentences(text),
        connectors: analyze_discourse_connectors(text),
        lexical_diversity: analyze_lexical_diversity(text),
    };
    tracing::debug!(
        passive = data.passive_voice.count,
        adverbs = data.adverbs.count,
        complex = data.complex_sentences.count,
        "style analysis complete"
    );
    data
}
