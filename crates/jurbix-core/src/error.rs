//! Error types for jurbix-core.
//!
//! The analyzers themselves never fail: empty or too-short text produces a
//! result whose level is `N/A`. Errors only arise at the edges, when loading
//! configuration or a lexicon from disk.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while preparing analysis inputs.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon {path}: {source}")]
    LexiconRead {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The lexicon JSON did not match the expected shape.
    #[error("invalid lexicon: {0}")]
    LexiconParse(#[from] serde_json::Error),

    /// A requested check name is not one of the known checks.
    #[error("unknown check: {0}")]
    UnknownCheck(String),

    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Input size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
