//! Sentiment lexicon.
//!
//! A lexicon is plain JSON with camelCase keys:
//!
//! ```json
//! {
//!   "positive": ["bom"], "negative": ["ruim"],
//!   "intensifiers": ["muito"], "negations": ["não"],
//!   "positiveEmojis": ["😀"], "negativeEmojis": ["😞"],
//!   "bigramsPositive": ["vale a"], "bigramsNegative": ["deixa a"]
//! }
//! ```
//!
//! The bigram lists are optional. A lexicon is loaded once and passed by
//! reference into the analyzers that need it.

use std::collections::HashSet;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// The Portuguese lexicon bundled with the crate.
const BUILTIN_LEXICON: &str = include_str!("../data/lexico.json");

/// Word lists driving sentiment analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    /// Words with positive polarity.
    pub positive: HashSet<String>,
    /// Words with negative polarity.
    pub negative: HashSet<String>,
    /// Words that scale the next emotion word.
    pub intensifiers: HashSet<String>,
    /// Words that open a negation window.
    pub negations: HashSet<String>,
    /// Emoji with positive polarity.
    pub positive_emojis: Vec<String>,
    /// Emoji with negative polarity.
    pub negative_emojis: Vec<String>,
    /// Two-word phrases with positive polarity.
    #[serde(default)]
    pub bigrams_positive: HashSet<String>,
    /// Two-word phrases with negative polarity.
    #[serde(default)]
    pub bigrams_negative: HashSet<String>,
}

impl Lexicon {
    /// The bundled Portuguese lexicon.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_LEXICON).expect("bundled lexicon is valid JSON")
    }

    /// Parse a lexicon from a JSON string.
    pub fn from_json(json: &str) -> AnalysisResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a lexicon file.
    #[tracing::instrument]
    pub fn from_file(path: &Utf8Path) -> AnalysisResult<Self> {
        let json =
            std::fs::read_to_string(path.as_std_path()).map_err(|e| AnalysisError::LexiconRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        let lexicon = Self::from_json(&json)?;
        tracing::debug!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Load from `path` when given, otherwise use the bundled lexicon.
    pub fn load(path: Option<&Utf8Path>) -> AnalysisResult<Self> {
        path.map_or_else(|| Ok(Self::builtin()), Self::from_file)
    }
}
