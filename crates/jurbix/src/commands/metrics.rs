//! Metrics command: word, sentence and paragraph counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use jurbix_core::analysis::calculate_basic_metrics;

use super::read_input_file;

/// Arguments for the `metrics` subcommand.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Print basic counts for a file.
#[instrument(name = "cmd_metrics", skip_all, fields(file = %args.file))]
pub fn cmd_metrics(
    args: MetricsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing metrics command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let m = calculate_basic_metrics(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&m)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!("  {:<26} {}", "Palavras:".cyan(), m.words);
    println!("  {:<26} {}", "Palavras únicas:".cyan(), m.unique_words);
    println!("  {:<26} {}", "Caracteres (com espaços):".cyan(), m.chars_with_spaces);
    println!("  {:<26} {}", "Caracteres (sem espaços):".cyan(), m.chars_no_spaces);
    println!("  {:<26} {}", "Frases:".cyan(), m.sentences);
    println!("  {:<26} {}", "Parágrafos:".cyan(), m.paragraphs);
    println!("  {:<26} {:.1}", "Palavras por frase:".cyan(), m.avg_words_per_sentence);
    println!("  {:<26} {:.1}", "Caracteres por palavra:".cyan(), m.avg_chars_per_word);
    println!("  {:<26} {}", "Tempo de leitura:".cyan(), m.reading_time);

    Ok(())
}
