//! Style command: passive voice, adverbs, long sentences, connectors and
//! lexical diversity.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jurbix_core::level::Level;
use jurbix_core::profiles::ContentProfile;
use jurbix_core::{AnalysisView, Finding, Lexicon, StyleAnalysisData, perform_style_analysis};

use super::{analyze_for_view, colored_label, print_findings, read_input_file};

/// Arguments for the `style` subcommand.
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// List every flagged sentence and word.
    #[arg(long)]
    pub details: bool,
}

#[derive(Serialize)]
struct StyleOutput<'a> {
    profile: &'a str,
    #[serde(flatten)]
    style: &'a StyleAnalysisData,
    findings: &'a [Finding],
}

fn print_line(name: &str, value: String, level: Level, label: &str) {
    println!("  {:<24} {:>10}  {}", name, value, colored_label(level, label));
}

/// Check the style of a file.
#[instrument(name = "cmd_style", skip_all, fields(file = %args.file, profile = %profile.id))]
pub fn cmd_style(
    args: StyleArgs,
    global_json: bool,
    profile: &ContentProfile,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, details = args.details, "executing style command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let (report, findings) = analyze_for_view(&content, lexicon, AnalysisView::Estilo, profile)?;
    let style = report
        .style
        .unwrap_or_else(|| perform_style_analysis(&content));

    if global_json {
        let output = StyleOutput {
            profile: &profile.id,
            style: &style,
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let pv = &style.passive_voice;
    let adv = &style.adverbs;
    let cs = &style.complex_sentences;
    let conn = &style.connectors;
    let div = &style.lexical_diversity;

    println!("{}", args.file.bold());
    print_line("Voz passiva", format!("{:.1}%", pv.percentage), pv.level, &pv.label);
    print_line("Advérbios", format!("{:.1}%", adv.percentage), adv.level, &adv.label);
    print_line("Frases complexas", format!("{:.1}%", cs.percentage), cs.level, &cs.label);
    print_line(
        "Conectores",
        format!("{:.1}%", conn.percentage),
        conn.level,
        &conn.label,
    );
    print_line(
        "Diversidade lexical",
        format!("{:.3}", div.shannon_index),
        div.level,
        &div.label,
    );

    if args.details {
        for m in &pv.instances {
            println!(
                "    {} frase {}: \"{} {}\" em \"{}\"",
                "passiva".yellow(),
                m.sentence_num,
                m.auxiliary,
                m.participle,
                m.sentence
            );
        }
        for s in &cs.sentences {
            println!(
                "    {} frase {}: {} palavras, {} vírgulas",
                "complexa".yellow(),
                s.sentence_num,
                s.words,
                s.commas
            );
        }
        if !adv.adverbs.is_empty() {
            println!("    {} {}", "advérbios:".yellow(), adv.adverbs.join(", "));
        }
    }

    print_findings(profile, &findings);
    Ok(())
}
