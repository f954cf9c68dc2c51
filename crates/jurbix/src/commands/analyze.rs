//! Analyze command: every check plus the profile's findings.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jurbix_core::profiles::ContentProfile;
use jurbix_core::{AnalysisView, Finding, FullAnalysisReport, Lexicon, analysis};

use super::{colored_label, print_findings, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,

    /// Which findings to report.
    #[arg(long, value_enum, default_value_t)]
    pub view: AnalysisView,

    /// Exit with an error when any finding is reported.
    #[arg(long)]
    pub fail_on_findings: bool,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    profile: &'a str,
    view: AnalysisView,
    #[serde(flatten)]
    report: &'a FullAnalysisReport,
    findings: &'a [Finding],
}

/// Run every selected check on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file, profile = %profile.id))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    profile: &ContentProfile,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, view = %args.view, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = analysis::run_full_analysis(&content, lexicon, args.checks.as_deref())
        .with_context(|| format!("failed to analyze {}", args.file))?;
    let findings = report.findings(args.view, &profile.thresholds);

    if global_json {
        let output = AnalyzeOutput {
            profile: &profile.id,
            view: args.view,
            report: &report,
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&args.file, &report);
        print_findings(profile, &findings);
    }

    if args.fail_on_findings && !findings.is_empty() {
        bail!(
            "{} has {} finding(s) for the {} profile.",
            args.file,
            findings.len(),
            profile.id,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &FullAnalysisReport) {
    println!("{}", file.bold());

    if let Some(ref b) = report.basic {
        println!(
            "\n  {} {} palavras, {} frases, {} parágrafos, leitura {}",
            "Métricas:".cyan(),
            b.words,
            b.sentences,
            b.paragraphs,
            b.reading_time,
        );
    }

    if let Some(ref a) = report.advanced {
        let r = &a.readability;
        println!(
            "\n  {} Flesch {:.1} ({}), JurbiX {:.1} ({}), Gulpease {:.1}",
            "Legibilidade:".cyan(),
            r.flesch_reading_ease.score,
            colored_label(r.flesch_reading_ease.level, &r.flesch_reading_ease.label),
            r.jurbix.score,
            colored_label(r.jurbix.level, &r.jurbix.label),
            r.gulpease.score,
        );
        println!(
            "  {} {:.1}%, sentimento {} ({:.3})",
            "Redundância:".cyan(),
            a.redundancy.score,
            a.sentiment.sentiment.label(),
            a.sentiment.compound,
        );
    }

    if let Some(ref s) = report.style {
        println!(
            "\n  {} passiva {:.1}%, advérbios {:.1}%, complexas {:.1}%, conectores {:.1}%, diversidade {:.3}",
            "Estilo:".cyan(),
            s.passive_voice.percentage,
            s.adverbs.percentage,
            s.complex_sentences.percentage,
            s.connectors.percentage,
            s.lexical_diversity.shannon_index,
        );
    }

    if let Some(ref acc) = report.accessibility {
        println!(
            "\n  {} {:.0} ({}), cognitiva {:.0}, visual {:.0}, linguística {:.0}",
            "Acessibilidade:".cyan(),
            acc.overall.score,
            colored_label(acc.overall.level, &acc.overall.label),
            acc.cognitive.score,
            acc.visual.score,
            acc.linguistic.score,
        );
    }

    if let Some(ref seo) = report.seo {
        println!(
            "\n  {} palavra-chave \"{}\" {:.1}%, {} título(s), {}",
            "SEO:".cyan(),
            seo.keyword.keyword.as_deref().unwrap_or("-"),
            seo.keyword.density,
            seo.structure.headings.len(),
            seo.length.label,
        );
    }
}
