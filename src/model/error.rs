//! Error types for the logseq-today application.
//!
//! Each module owns a `thiserror` enum for its own failure modes; this module
//! defines the top-level [`AppError`] they all convert into via `From`, so the
//! binary composes them with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`] - config file unreadable or invalid TOML
//!   - [`LoggingError`] - log file setup failed
//!   - [`PreferenceError`] - preference store unreadable or unwritable
//!   - [`TuiError`] - terminal setup or drawing failed
//!   - [`LaunchError`] - the Logseq opener command failed
//!   - `std::io::Error` / `serde_json::Error` - writing one-shot output
//!
//! # What is NOT an error
//!
//! Failing to find or read today's journal is not represented here. The
//! resolver turns those failures into a single placeholder line
//! ([`crate::model::JournalDocument::placeholder`]) and the viewer shows it
//! like any other journal text.

use crate::config::ConfigError;
use crate::launch::LaunchError;
use crate::logging::LoggingError;
use crate::prefs::PreferenceError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// # Examples
///
/// ```no_run
/// use logseq_today::model::AppError;
/// use logseq_today::prefs::PreferenceStore;
///
/// fn current_dir_setting(store: &PreferenceStore) -> Result<Option<String>, AppError> {
///     // PreferenceError converts to AppError via From
///     Ok(store.load()?.journal_path)
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The preference store could not be read or written.
    #[error("Preference error: {0}")]
    Preferences(#[from] PreferenceError),

    /// Terminal setup, drawing or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// Opening Logseq failed outside the viewer (inside the viewer the
    /// failure is shown in the status line instead).
    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    /// A directory passed to `set-dir` does not exist or is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The rejected path.
        path: PathBuf,
    },

    /// Writing one-shot output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing `--json` output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_to_app_error() {
        let io_err = std::io::Error::other("broken pipe");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("broken pipe"));
    }

    #[test]
    fn config_error_converts_to_app_error() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("config.toml"),
            reason: "expected `=`".to_string(),
        };
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Config(_)));
        assert!(app_err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn launch_error_converts_to_app_error() {
        let app_err: AppError = LaunchError::EmptyCommand.into();
        assert!(matches!(app_err, AppError::Launch(LaunchError::EmptyCommand)));
    }

    #[test]
    fn not_a_directory_mentions_path() {
        let err = AppError::NotADirectory {
            path: PathBuf::from("/tmp/nowhere"),
        };
        assert!(err.to_string().contains("/tmp/nowhere"));
    }
}
