//! Configuration file loading with precedence handling.

use crate::model::TagColor;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "LOGSEQ_TODAY_CONFIG";
/// Environment variable overriding the preference file path.
pub const ENV_PREFS: &str = "LOGSEQ_TODAY_PREFS";
/// Environment variable overriding the journal directory.
pub const ENV_DIR: &str = "LOGSEQ_TODAY_DIR";
/// Environment variable overriding the tag colour.
pub const ENV_TAG_COLOR: &str = "LOGSEQ_TODAY_TAG_COLOR";
/// Environment variable overriding the log file path.
pub const ENV_LOG: &str = "LOGSEQ_TODAY_LOG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/logseq-today/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Command (program and arguments) that opens Logseq.
    #[serde(default)]
    pub launch_command: Option<Vec<String>>,

    /// Seconds between automatic refreshes in the viewer; 0 disables.
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path to the preference store.
    #[serde(default)]
    pub prefs_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Command that opens Logseq.
    pub launch_command: Vec<String>,
    /// Auto-refresh interval in seconds (0 = manual only).
    pub refresh_interval_secs: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path to the preference store.
    pub prefs_path: PathBuf,
    /// Journal directory that takes precedence over the stored one.
    pub journal_dir_override: Option<PathBuf>,
    /// Tag colour that takes precedence over the stored one.
    pub tag_color_override: Option<TagColor>,
    /// Value of `LOGSEQ_TODAY_TAG_COLOR` that failed to parse, reported once
    /// logging is up.
    pub invalid_tag_color: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            launch_command: default_launch_command(),
            refresh_interval_secs: 60,
            log_file_path: default_log_path(),
            prefs_path: crate::prefs::default_prefs_path(),
            journal_dir_override: None,
            tag_color_override: None,
            invalid_tag_color: None,
        }
    }
}

/// Platform command that hands the `logseq://` URL to the system opener.
pub fn default_launch_command() -> Vec<String> {
    let parts: &[&str] = if cfg!(target_os = "macos") {
        &["open", "logseq://"]
    } else if cfg!(target_os = "windows") {
        &["cmd", "/C", "start", "", "logseq://"]
    } else {
        &["xdg-open", "logseq://"]
    };
    parts.iter().map(|s| s.to_string()).collect()
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/logseq-today/logseq-today.log` on Linux, or
/// falls back to the current directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("logseq-today").join("logseq-today.log")
    } else {
        PathBuf::from("logseq-today.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/logseq-today/config.toml` on Linux, appropriate path on
/// other platforms, or `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("logseq-today").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LOGSEQ_TODAY_CONFIG` environment variable
/// 3. Default path `~/.config/logseq-today/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        launch_command: config.launch_command.unwrap_or(defaults.launch_command),
        refresh_interval_secs: config
            .refresh_interval_secs
            .unwrap_or(defaults.refresh_interval_secs),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        prefs_path: config.prefs_path.unwrap_or(defaults.prefs_path),
        journal_dir_override: defaults.journal_dir_override,
        tag_color_override: defaults.tag_color_override,
        invalid_tag_color: defaults.invalid_tag_color,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LOGSEQ_TODAY_PREFS`: preference file path
/// - `LOGSEQ_TODAY_DIR`: journal directory
/// - `LOGSEQ_TODAY_TAG_COLOR`: tag colour (an invalid value is kept in
///   `invalid_tag_color` and otherwise ignored)
/// - `LOGSEQ_TODAY_LOG`: log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(ENV_PREFS) {
        config.prefs_path = PathBuf::from(path);
    }

    if let Ok(dir) = std::env::var(ENV_DIR) {
        config.journal_dir_override = Some(PathBuf::from(dir));
    }

    if let Ok(color) = std::env::var(ENV_TAG_COLOR) {
        match color.parse::<TagColor>() {
            Ok(color) => config.tag_color_override = Some(color),
            Err(_) => config.invalid_tag_color = Some(color),
        }
    }

    if let Ok(path) = std::env::var(ENV_LOG) {
        config.log_file_path = PathBuf::from(path);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    dir_override: Option<PathBuf>,
    tag_color_override: Option<TagColor>,
) -> ResolvedConfig {
    if let Some(dir) = dir_override {
        config.journal_dir_override = Some(dir);
    }

    if let Some(color) = tag_color_override {
        config.tag_color_override = Some(color);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
