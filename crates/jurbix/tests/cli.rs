//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "O relatório foi escrito pelo gerente. A equipe gostou muito do resultado.\n\n\
                      Porém, ainda há pontos a melhorar no texto final.";

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `content` to a file in a fresh temp dir.
fn sample_file(content: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("texto.txt");
    fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

fn json_stdout(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("readability"));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let json = json_stdout(&["info", "--json"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert!(json["config"].is_object());
}

// =============================================================================
// Metrics
// =============================================================================

#[test]
fn metrics_counts_words_and_sentences() {
    let (_tmp, path) = sample_file("Olá mundo. Tudo bem?");
    let json = json_stdout(&["metrics", &path, "--json"]);
    assert_eq!(json["words"], 4);
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["paragraphs"], 1);
}

#[test]
fn metrics_reads_stdin() {
    let output = cmd()
        .args(["metrics", "-", "--json"])
        .write_stdin("Um dois três.")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["words"], 3);
}

#[test]
fn metrics_text_output() {
    let (_tmp, path) = sample_file("Olá mundo.");
    cmd()
        .args(["--color", "never", "metrics", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Palavras:"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["metrics", "/nonexistent/texto.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Analyzers
// =============================================================================

#[test]
fn readability_json_has_every_index() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["readability", &path, "--json"]);
    for index in ["gunning_fog", "flesch_reading_ease", "smog", "coleman_liau", "gulpease", "jurbix"] {
        assert!(json["readability"][index]["score"].is_number(), "missing {index}");
    }
    assert_eq!(json["profile"], "default");
    assert!(json["findings"].is_array());
}

#[test]
fn style_detects_passive_voice() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["style", &path, "--json"]);
    assert!(json["passive_voice"]["count"].as_u64().unwrap() >= 1);
}

#[test]
fn style_details_lists_passive_sentence() {
    let (_tmp, path) = sample_file(SAMPLE);
    cmd()
        .args(["--color", "never", "style", &path, "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foi escrito"));
}

#[test]
fn accessibility_json_has_categories() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["accessibility", &path, "--json"]);
    for key in ["cognitive", "visual", "linguistic"] {
        assert!(json[key]["score"].is_number(), "missing {key}");
    }
}

#[test]
fn seo_flags_short_text() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["seo", &path, "--json"]);
    let findings = json["findings"].as_array().unwrap();
    assert!(findings.iter().any(|f| f["metric"] == "word_count"));
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_json_has_every_section() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["analyze", &path, "--json"]);
    for key in ["basic", "advanced", "style", "accessibility", "seo", "findings"] {
        assert!(!json[key].is_null(), "missing {key}");
    }
    assert_eq!(json["view"], "geral");
}

#[test]
fn analyze_check_selection() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["analyze", &path, "--checks", "basic,style", "--json"]);
    assert!(json["basic"].is_object());
    assert!(json["style"].is_object());
    assert!(json["seo"].is_null());
}

#[test]
fn analyze_unknown_check_fails() {
    let (_tmp, path) = sample_file(SAMPLE);
    cmd()
        .args(["analyze", &path, "--checks", "grammar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown check: grammar"));
}

#[test]
fn analyze_fail_on_findings_gates() {
    let (_tmp, path) = sample_file(SAMPLE);
    cmd()
        .args(["analyze", &path, "--fail-on-findings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("finding(s)"));
}

#[test]
fn analyze_respects_profile_flag() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["analyze", &path, "--profile", "redes-sociais", "--json"]);
    assert_eq!(json["profile"], "redes-sociais");
}

// =============================================================================
// Prompt & Profiles
// =============================================================================

#[test]
fn prompt_contains_text_and_instructions() {
    let (_tmp, path) = sample_file(SAMPLE);
    cmd()
        .args(["prompt", &path, "--view", "estilo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O relatório foi escrito pelo gerente."))
        .stdout(predicate::str::contains("estilo"));
}

#[test]
fn prompt_json_lists_feedbacks() {
    let (_tmp, path) = sample_file(SAMPLE);
    let json = json_stdout(&["prompt", &path, "--json"]);
    assert!(!json["included_feedbacks"].as_array().unwrap().is_empty());
}

#[test]
fn profiles_lists_builtins() {
    cmd()
        .args(["--color", "never", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blog"))
        .stdout(predicate::str::contains("relatorio-formal"))
        .stdout(predicate::str::contains("marketing"));
}

#[test]
fn profiles_show_one_as_json() {
    let json = json_stdout(&["profiles", "blog", "--json"]);
    assert_eq!(json["id"], "blog");
    assert!(json["thresholds"]["min_flesch_ease"].is_number());
}

#[test]
fn profiles_unknown_id_fails() {
    cmd()
        .args(["profiles", "poesia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown profile"));
}

// =============================================================================
// Input limit
// =============================================================================

#[test]
fn input_limit_from_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("limite.toml");
    fs::write(&config, "max_input_bytes = 10\n").unwrap();
    let text = tmp.path().join("texto.txt");
    fs::write(&text, SAMPLE).unwrap();

    cmd()
        .args([
            "-c",
            config.to_str().unwrap(),
            "metrics",
            text.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}
