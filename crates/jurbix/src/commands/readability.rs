//! Readability command: the six indices, redundancy and sentiment.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jurbix_core::analysis::{AdvancedMetricsData, empty_advanced_metrics};
use jurbix_core::profiles::ContentProfile;
use jurbix_core::{AnalysisView, Finding, Lexicon};

use super::{analyze_for_view, print_findings, print_metric, read_input_file};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct ReadabilityOutput<'a> {
    profile: &'a str,
    #[serde(flatten)]
    metrics: &'a AdvancedMetricsData,
    findings: &'a [Finding],
}

/// Score the readability of a file and judge it against the profile.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file, profile = %profile.id))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    profile: &ContentProfile,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let (report, findings) =
        analyze_for_view(&content, lexicon, AnalysisView::Legibilidade, profile)?;
    let metrics = report.advanced.unwrap_or_else(empty_advanced_metrics);

    if global_json {
        let output = ReadabilityOutput {
            profile: &profile.id,
            metrics: &metrics,
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    for (index, result) in metrics.readability.iter() {
        print_metric(index.label(), result);
    }
    print_metric("Redundância (%)", &metrics.redundancy);
    println!(
        "  {:<22} {:>6.3}  {}",
        "Sentimento",
        metrics.sentiment.compound,
        metrics.sentiment.sentiment.label()
    );
    println!("\n  {}", metrics.length_feedback.dimmed());
    print_findings(profile, &findings);

    Ok(())
}
