//! Info command implementation

use clap::Args;
use jurbix_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lexicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    custom_profiles: Vec<String>,
}

impl ConfigInfo {
    fn from_config(
        config: &Config,
        sources: &ConfigSources,
        profile_id: &str,
        max_input: Option<usize>,
    ) -> Self {
        let mut custom_profiles: Vec<String> = config.profiles.keys().cloned().collect();
        custom_profiles.sort();
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            profile: profile_id.to_string(),
            lexicon: config.lexicon.as_ref().map(ToString::to_string),
            max_input_bytes: max_input,
            custom_profiles,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package and configuration information.
///
/// `profile_id` is the profile in effect after `--profile`; `max_input` is
/// the effective input limit (`None` when disabled).
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    profile_id: &str,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources, profile_id, max_input),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let pkg = &full_info.package;
    println!("{} {}", pkg.name.bold(), pkg.version.green());
    if !pkg.description.is_empty() {
        println!("{}", pkg.description);
    }
    if !pkg.license.is_empty() {
        println!("{}: {}", "License".dimmed(), pkg.license);
    }
    if !pkg.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), pkg.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {}", "Profile".dimmed(), cfg.profile);
    println!(
        "{}: {}",
        "Lexicon".dimmed(),
        cfg.lexicon.as_deref().unwrap_or("built-in")
    );
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }
    if !cfg.custom_profiles.is_empty() {
        println!(
            "{}: {}",
            "Custom profiles".dimmed(),
            cfg.custom_profiles.join(", ")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_info_text_succeeds() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources, "default", None).is_ok());
    }

    #[test]
    fn cmd_info_json_via_global() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources, "blog", Some(10)).is_ok());
    }

    #[test]
    fn config_info_no_file() {
        let info = ConfigInfo::from_config(
            &Config::default(),
            &ConfigSources::default(),
            "default",
            Some(1024),
        );
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.profile, "default");
        assert_eq!(info.max_input_bytes, Some(1024));
        assert!(info.custom_profiles.is_empty());
    }
}
