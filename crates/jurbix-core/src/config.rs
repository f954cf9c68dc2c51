//! Configuration loading and discovery.
//!
//! Configuration is layered with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config from the XDG config directory
//! 3. Project config found by walking up from the current directory
//! 4. Files passed explicitly (the CLI's `--config`)
//! 5. `JURBIX_*` environment variables
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `jurbix.<ext>` in current directory or any parent
//! - `.jurbix.<ext>` in current directory or any parent
//! - `~/.config/jurbix/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use jurbix_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("profile: {}", config.profile_id());
//! ```

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisResult, ConfigError, ConfigResult};
use crate::lexicon::Lexicon;
use crate::profiles::{DEFAULT_PROFILE_ID, ProfileDefinition, ProfileStore};

/// The configuration for jurbix.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for the daily-rolling log file. Omit to log to stderr only.
    pub log_dir: Option<Utf8PathBuf>,
    /// Content profile used to judge results. Unknown ids fall back to `default`.
    pub profile: Option<String>,
    /// Sentiment lexicon JSON file. Omit to use the built-in lexicon.
    pub lexicon: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Applies to both the CLI and the MCP server. Use `disable_input_limit`
    /// to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored.
    #[serde(default)]
    pub disable_input_limit: bool,
    /// Custom content profiles (id → definition).
    ///
    /// These extend the built-in profiles. Each one starts from `based_on`
    /// (default: `default`) and overrides the thresholds it lists.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, ProfileDefinition>,
}

impl Config {
    /// The selected profile id, or `default`.
    pub fn profile_id(&self) -> &str {
        self.profile.as_deref().unwrap_or(DEFAULT_PROFILE_ID)
    }

    /// Built-in profiles plus the ones declared in this config.
    pub fn profile_store(&self) -> ProfileStore {
        ProfileStore::builtin().with_definitions(&self.profiles)
    }

    /// Load the configured lexicon, or the built-in one.
    pub fn load_lexicon(&self) -> AnalysisResult<Lexicon> {
        Lexicon::load(self.lexicon.as_deref())
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which configuration files were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "jurbix";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/jurbix/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Explicit files are merged after discovered files, in the order added.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // JURBIX_PROFILE=blog, JURBIX_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("JURBIX_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            profile = config.profile_id(),
            custom_profiles = config.profiles.len(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Config files from the closest directory that has any, low→high
    /// precedence: dotfiles before regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();
            for prefix in [".", ""] {
                for ext in CONFIG_EXTENSIONS {
                    let candidate = dir.join(format!("{prefix}{APP_NAME}.{ext}"));
                    if candidate.is_file() {
                        found.push(candidate);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // A config next to the marker still counts.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/jurbix/` on Linux, `~/Library/Application Support/jurbix/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
    }

    fn load_file(path: &Utf8Path) -> Config {
        ConfigLoader::new()
            .with_user_config(false)
            .with_file(path)
            .load()
            .unwrap()
            .0
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.profile_id(), "default");
        assert!(!config.disable_input_limit);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn single_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "log_level = \"debug\"\nlog_dir = \"/tmp/jurbix\"\nprofile = \"blog\"\n",
        )
        .unwrap();

        let config = load_file(&utf8(&path));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_dir.as_deref().map(Utf8Path::as_str), Some("/tmp/jurbix"));
        assert_eq!(config.profile_id(), "blog");
    }

    #[test]
    fn later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, "log_level = \"warn\"").unwrap();
        let over = tmp.path().join("override.yaml");
        fs::write(&over, "log_level: error\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&base))
            .with_file(utf8(&over))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.primary_file(), Some(utf8(&over).as_path()));
    }

    #[test]
    fn project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        let deep = project.join("capitulos").join("rascunhos");
        fs::create_dir_all(&deep).unwrap();
        fs::write(project.join(".jurbix.toml"), "profile = \"marketing\"").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(&deep))
            .load()
            .unwrap();

        assert_eq!(config.profile_id(), "marketing");
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(child.join(".git")).unwrap();
        fs::write(parent.join("jurbix.toml"), "log_level = \"debug\"").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(&work))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn regular_file_beats_dotfile() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".jurbix.toml"), "log_level = \"debug\"\nprofile = \"blog\"").unwrap();
        fs::write(tmp.path().join("jurbix.json"), r#"{"log_level": "error"}"#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path()))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.profile_id(), "blog");
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join(".jurbix.toml"), "log_level = \"warn\"").unwrap();
        fs::write(child.join(".jurbix.toml"), "log_level = \"error\"").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(&child))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn load_or_error_fails_when_no_config() {
        let tmp = TempDir::new().unwrap();
        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(tmp.path()))
            .with_boundary_marker(".")
            .load_or_error();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "max_input_bytes = 1024\ndisable_input_limit = true\n").unwrap();

        let config = load_file(&utf8(&path));
        assert!(config.disable_input_limit);
        assert_eq!(config.max_input_bytes, Some(1024));
    }

    #[test]
    fn custom_profiles_from_yaml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("jurbix.yaml");
        fs::write(
            &path,
            r"
profile: newsletter
profiles:
  newsletter:
    based_on: blog
    name: Newsletter
    thresholds:
      max_words_per_sentence: 18
      min_word_count: 200
",
        )
        .unwrap();

        let config = load_file(&utf8(&path));
        let store = config.profile_store();
        let profile = store.get_profile_by_id(config.profile_id());
        assert_eq!(profile.id, "newsletter");
        assert_eq!(profile.name, "Newsletter");
        assert!((profile.thresholds.max_words_per_sentence - 18.0).abs() < f64::EPSILON);
        assert_eq!(profile.thresholds.min_word_count, 200);
        let blog = store.get_profile_by_id("blog");
        assert!(
            (profile.thresholds.min_flesch_ease - blog.thresholds.min_flesch_ease).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn unknown_profile_falls_back_to_default() {
        let config = Config {
            profile: Some("inexistente".into()),
            ..Config::default()
        };
        let store = config.profile_store();
        assert_eq!(store.get_profile_by_id(config.profile_id()).id, "default");
    }

    #[test]
    fn missing_lexicon_file_is_an_error() {
        let config = Config {
            lexicon: Some("/nonexistent/lexico.json".into()),
            ..Config::default()
        };
        assert!(config.load_lexicon().is_err());
        assert!(Config::default().load_lexicon().is_ok());
    }

    #[test]
    fn invalid_value_is_a_deserialize_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "log_level = \"loud\"\n").unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&path))
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    #[allow(unsafe_code)]
    fn env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "profile = \"blog\"\n").unwrap();

        // SAFETY: the mutex serializes env access across tests.
        unsafe {
            std::env::set_var("JURBIX_PROFILE", "marketing");
        }

        let config = load_file(&utf8(&path));

        // SAFETY: cleanup under the same lock.
        unsafe {
            std::env::remove_var("JURBIX_PROFILE");
        }

        assert_eq!(config.profile_id(), "marketing");
    }

    #[test]
    fn user_config_dir_names_the_app() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("jurbix"));
        }
    }
}
