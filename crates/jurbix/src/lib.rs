//! Library interface for the `jurbix` CLI.
//!
//! Exposes the argument parser and command structure as a library, mainly
//! for testing. The actual entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;
pub mod observability;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output. Call once at startup.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, jurbix_core=trace)
    JURBIX_LOG_PATH        Explicit log file path
    JURBIX_LOG_DIR         Log directory
    JURBIX_PROFILE         Content profile (default, blog, marketing, ...)
    JURBIX_LEXICON         Sentiment lexicon JSON file
";

/// Command-line interface definition for jurbix.
#[derive(Parser)]
#[command(name = "jurbix")]
#[command(about = "Readability, style, accessibility and SEO analysis for Portuguese text", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Content profile used to judge results (overrides config)
    #[arg(short, long, global = true, value_name = "ID")]
    pub profile: Option<String>,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Count words, sentences, paragraphs and reading time
    Metrics(commands::metrics::MetricsArgs),

    /// Score readability (Fog, Flesch, SMOG, Coleman-Liau, Gulpease, JurbiX)
    Readability(commands::readability::ReadabilityArgs),

    /// Check passive voice, adverbs, long sentences, connectors and diversity
    Style(commands::style::StyleArgs),

    /// Score cognitive, visual and linguistic accessibility
    Accessibility(commands::accessibility::AccessibilityArgs),

    /// Check keyword density, structure and length for search engines
    Seo(commands::seo::SeoArgs),

    /// Run every analysis and list what falls outside the profile
    Analyze(commands::analyze::AnalyzeArgs),

    /// Build a revision prompt from the analysis findings
    Prompt(commands::prompt::PromptArgs),

    /// List content profiles or show one profile's thresholds
    Profiles(commands::profiles::ProfilesArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
