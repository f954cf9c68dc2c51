//! SEO command: keyword and LSI density, structure, readability and length.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jurbix_core::profiles::ContentProfile;
use jurbix_core::{AnalysisView, Finding, Lexicon, SeoAnalysisResult, analyze_seo};

use super::{analyze_for_view, colored_label, print_findings, print_metric, read_input_file};

/// Arguments for the `seo` subcommand.
#[derive(Args, Debug)]
pub struct SeoArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct SeoOutput<'a> {
    profile: &'a str,
    #[serde(flatten)]
    seo: &'a SeoAnalysisResult,
    findings: &'a [Finding],
}

/// Check a file's search-engine signals.
#[instrument(name = "cmd_seo", skip_all, fields(file = %args.file, profile = %profile.id))]
pub fn cmd_seo(
    args: SeoArgs,
    global_json: bool,
    profile: &ContentProfile,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing seo command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let (report, findings) = analyze_for_view(&content, lexicon, AnalysisView::Seo, profile)?;
    let seo = report.seo.unwrap_or_else(|| analyze_seo(&content));

    if global_json {
        let output = SeoOutput {
            profile: &profile.id,
            seo: &seo,
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    let kw = &seo.keyword;
    println!(
        "  {:<22} {:>6.1}% {}  {}",
        "Palavra-chave",
        kw.density,
        kw.keyword.as_deref().unwrap_or("-").cyan(),
        colored_label(kw.level, &kw.label)
    );
    let lsi = &seo.lsi;
    println!(
        "  {:<22} {:>6.1}% {}  {}",
        "LSI",
        lsi.density,
        lsi.synonyms_found.join(", ").dimmed(),
        colored_label(lsi.level, &lsi.label)
    );
    let st = &seo.structure;
    println!(
        "  {:<22} {:>6}  {}",
        "Títulos",
        st.headings.len(),
        colored_label(st.level, &st.label)
    );
    print_metric("Legibilidade (Flesch)", &seo.readability);
    print_metric("Tamanho (palavras)", &seo.length);

    print_findings(profile, &findings);
    Ok(())
}
