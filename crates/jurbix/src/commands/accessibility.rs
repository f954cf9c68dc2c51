//! Accessibility command: cognitive, visual and linguistic scores.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jurbix_core::findings::accessibility_findings;
use jurbix_core::profiles::ContentProfile;
use jurbix_core::{AccessibilityAnalysisResult, Finding, calculate_accessibility_metrics};

use super::{colored_label, print_findings, print_metric, read_input_file};

/// Arguments for the `accessibility` subcommand.
#[derive(Args, Debug)]
pub struct AccessibilityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct AccessibilityOutput<'a> {
    profile: &'a str,
    #[serde(flatten)]
    result: &'a AccessibilityAnalysisResult,
    findings: &'a [Finding],
}

/// Score the accessibility of a file.
#[instrument(name = "cmd_accessibility", skip_all, fields(file = %args.file, profile = %profile.id))]
pub fn cmd_accessibility(
    args: AccessibilityArgs,
    global_json: bool,
    profile: &ContentProfile,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing accessibility command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let result = calculate_accessibility_metrics(&content);
    let findings = accessibility_findings(&result, &profile.thresholds);

    if global_json {
        let output = AccessibilityOutput {
            profile: &profile.id,
            result: &result,
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    print_metric("Geral", &result.overall);
    for category in result.categories() {
        println!(
            "  {:<22} {:>6.0}  {}",
            category.category.label(),
            category.score,
            colored_label(category.level, &category.label)
        );
    }

    if !result.priority_suggestions.is_empty() {
        println!("\n  {}", "Sugestões prioritárias".cyan().bold());
        for (i, suggestion) in result.priority_suggestions.iter().enumerate() {
            println!("    {}. {suggestion}", i + 1);
        }
    }

    print_findings(profile, &findings);
    Ok(())
}
