//! Core library for jurbix.
//!
//! Readability, style, accessibility and SEO analysis for Portuguese prose.
//! Every analyzer is a pure function over `&str`: no I/O, no shared mutable
//! state, and degenerate input yields `N/A` results instead of errors.
//!
//! # Modules
//!
//! - [`text`] - Word, sentence and paragraph primitives
//! - [`readability`] - Fog, Flesch, SMOG, Coleman-Liau, Gulpease and JurbiX
//! - [`analysis`] - Basic and advanced metrics, plus the full-report orchestrator
//! - [`style`] - Passive voice, adverbs, complex sentences, connectors, diversity
//! - [`accessibility`] - Cognitive, visual and linguistic scoring
//! - [`seo`] - Keyword, LSI, structure, readability and length signals
//! - [`profiles`] - Content profiles and their thresholds
//! - [`findings`] / [`prompt`] - Profile-aware judgments and revision prompts
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use jurbix_core::{Lexicon, run_full_analysis};
//!
//! let report = run_full_analysis("O texto é claro e direto.", &Lexicon::builtin(), None).unwrap();
//! assert!(report.basic.is_some());
//! ```
#![deny(unsafe_code)]

pub mod accessibility;
pub mod analysis;
pub mod config;
pub mod error;
pub mod findings;
pub mod level;
pub mod lexicon;
pub mod profiles;
pub mod prompt;
pub mod readability;
pub mod seo;
pub mod style;
pub mod syllables;
pub mod text;
pub mod word_lists;

pub use accessibility::{AccessibilityAnalysisResult, calculate_accessibility_metrics};
pub use analysis::{
    ALL_CHECKS, AdvancedMetricsData, BasicMetricsData, FullAnalysisReport, calculate_advanced_metrics,
    calculate_basic_metrics, check_input_size, run_full_analysis,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use findings::{AnalysisView, Finding, FindingArea};
pub use level::{Level, MetricResult, Scale};
pub use lexicon::Lexicon;
pub use profiles::{ContentProfile, ProfileStore, ThresholdConfig, ThresholdOverrides};
pub use prompt::{AiPrompt, generate_ai_prompt};
pub use readability::{ReadabilityScores, calculate_readability};
pub use seo::{SeoAnalysisResult, analyze_seo};
pub use style::{StyleAnalysisData, perform_style_analysis};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
