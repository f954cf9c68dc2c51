//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;

use jurbix_core::profiles::{ContentProfile, ProfileStore};
use jurbix_core::{
    AnalysisView, Finding, FullAnalysisReport, Level, Lexicon, MetricResult, run_full_analysis,
};

pub mod accessibility;
pub mod analyze;
pub mod info;
pub mod metrics;
pub mod profiles;
pub mod prompt;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod seo;
pub mod style;

/// Path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .lock()
        .take(stdin_read_cap(max_bytes))
        .read_to_string(&mut content)
        .context("failed to read standard input")?;
    if let Some(max) = max_bytes
        && content.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    Ok(content)
}

/// Bytes to read from stdin: one past the limit is enough to know it was
/// exceeded.
fn stdin_read_cap(max_bytes: Option<usize>) -> u64 {
    max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1))
}

/// Resolve the active profile, warning when the id is unknown.
pub fn resolve_profile<'a>(store: &'a ProfileStore, id: &str) -> &'a ContentProfile {
    if !store.contains(id) {
        tracing::warn!(id, "unknown profile, using the default");
    }
    store.get_profile_by_id(id)
}

/// Run every check and collect the findings `view` shows for `profile`.
pub fn analyze_for_view(
    text: &str,
    lexicon: &Lexicon,
    view: AnalysisView,
    profile: &ContentProfile,
) -> anyhow::Result<(FullAnalysisReport, Vec<Finding>)> {
    let report = run_full_analysis(text, lexicon, None)?;
    let findings = report.findings(view, &profile.thresholds);
    Ok((report, findings))
}

/// Print findings under a header naming the profile.
pub fn print_findings(profile: &ContentProfile, findings: &[Finding]) {
    println!();
    if findings.is_empty() {
        println!(
            "  {} tudo dentro do perfil {}",
            "OK:".green(),
            profile.name.bold()
        );
        return;
    }
    println!(
        "  {} ({} no perfil {})",
        "A melhorar".yellow().bold(),
        findings.len(),
        profile.name.bold()
    );
    for finding in findings {
        println!("    - {}", finding.message);
    }
}

/// A label colored by how good the level is.
pub fn colored_label(level: Level, label: &str) -> String {
    match level {
        Level::Excellent | Level::Good => label.green().to_string(),
        Level::Fair => label.yellow().to_string(),
        Level::Poor => label.red().to_string(),
        Level::NotApplicable => label.dimmed().to_string(),
    }
}

/// Print one metric line: name, score, colored label.
pub fn print_metric(name: &str, metric: &MetricResult) {
    println!(
        "  {:<22} {:>6.1}  {}",
        name,
        metric.score,
        colored_label(metric.level, &metric.label)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("texto.txt")).unwrap();
        fs::write(&path, "Olá, mundo.").unwrap();
        assert_eq!(read_input_file(&path, Some(1024)).unwrap(), "Olá, mundo.");
    }

    #[test]
    fn rejects_oversized_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("grande.txt")).unwrap();
        fs::write(&path, "a".repeat(100)).unwrap();
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input_file(Utf8Path::new("/nonexistent/texto.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn stdin_cap_is_one_past_the_limit() {
        assert_eq!(stdin_read_cap(Some(10)), 11);
        assert_eq!(stdin_read_cap(None), u64::MAX);
        assert_eq!(stdin_read_cap(Some(usize::MAX)), u64::MAX);
    }

    #[test]
    fn unknown_profile_resolves_to_default() {
        let store = ProfileStore::builtin();
        assert_eq!(resolve_profile(&store, "nao-existe").id, "default");
        assert_eq!(resolve_profile(&store, "blog").id, "blog");
    }
}
