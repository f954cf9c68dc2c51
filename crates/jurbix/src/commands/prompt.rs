//! Prompt command: a revision prompt built from the findings.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use jurbix_core::profiles::ContentProfile;
use jurbix_core::{AnalysisView, Lexicon, run_full_analysis};

use super::read_input_file;

/// Arguments for the `prompt` subcommand.
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Which findings the prompt should address.
    #[arg(long, value_enum, default_value_t)]
    pub view: AnalysisView,
}

/// Print a revision prompt for a file.
#[instrument(name = "cmd_prompt", skip_all, fields(file = %args.file, profile = %profile.id))]
pub fn cmd_prompt(
    args: PromptArgs,
    global_json: bool,
    profile: &ContentProfile,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, view = %args.view, "executing prompt command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = run_full_analysis(&content, lexicon, None)
        .with_context(|| format!("failed to analyze {}", args.file))?;
    let prompt = report
        .prompt(&content, args.view, &profile.thresholds)
        .context("analysis is missing a section needed for the prompt")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&prompt)?);
    } else {
        print!("{}", prompt.prompt);
    }

    Ok(())
}
