//! Logging setup.
//!
//! Two sinks: human-readable events on stderr, and an optional plain-text
//! log file. The file sink is enabled by `JURBIX_LOG_PATH` (exact file),
//! `JURBIX_LOG_DIR` or the `log_dir` config key (daily-rolling
//! `jurbix.log`). `RUST_LOG` overrides both filters.
//!
//! stdout is never written to, so `serve` can speak MCP on it.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Env var naming an exact log file.
pub const LOG_PATH_ENV: &str = "JURBIX_LOG_PATH";
/// Env var naming a log directory.
pub const LOG_DIR_ENV: &str = "JURBIX_LOG_DIR";

const LOG_FILE_NAME: &str = "jurbix.log";

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for the daily-rolling log file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the env vars, falling back to the configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let from_env = |key| std::env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            log_path: from_env(LOG_PATH_ENV),
            log_dir: from_env(LOG_DIR_ENV).or(config_log_dir),
        }
    }

    /// Whether a file sink is configured.
    pub const fn writes_file(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }
}

/// Keeps the file writer flushing until dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Level directive for the given flags.
///
/// `-q` wins; each `-v` steps down from `default_level` to debug, then trace.
pub fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Filter for the log file: the configured level, adjusted by `-q`/`-v`.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(quiet, verbose, default_level)))
}

/// Filter for stderr: warnings unless `-v` asks for more.
pub fn console_filter(quiet: bool, verbose: u8) -> EnvFilter {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    console: EnvFilter,
    file: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console);

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: guard })
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some(tracing_appender::rolling::never(dir, name)));
    }
    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_NAME)));
    }
    Ok(None)
}
