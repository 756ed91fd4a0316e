//! Persisted user choices: the journal directory and the tag colour.
//!
//! Stored as a small TOML file, separate from the config file, because these
//! values are written by the program (`set-dir`, `set-color`) rather than
//! edited by hand.

use crate::model::TagColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The file exists but could not be read.
    #[error("Failed to read preferences at {path}: {source}")]
    Read {
        /// Preference file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written (or its directory created).
    #[error("Failed to write preferences at {path}: {source}")]
    Write {
        /// Preference file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file holds invalid TOML or an invalid colour.
    #[error("Invalid preferences in {path}: {reason}")]
    Parse {
        /// Preference file path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Serializing preferences failed.
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The persisted values. Both are optional until the user sets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preferences {
    /// Logseq graph directory (the folder containing `journals/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_path: Option<String>,

    /// Highlight colour for tags and links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_color: Option<TagColor>,
}

/// Default preference file location: `<data_dir>/logseq-today/prefs.toml`.
pub fn default_prefs_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("logseq-today").join("prefs.toml"),
        None => PathBuf::from("logseq-today-prefs.toml"),
    }
}

/// Reads and writes [`Preferences`] at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// A store backed by the file at `path`, which need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the preference file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences. A missing file yields empty preferences.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Preferences, PreferenceError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| PreferenceError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|e| PreferenceError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Write preferences, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory or file cannot be written.
    pub fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
        let write_err = |source: std::io::Error| PreferenceError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let contents = toml::to_string_pretty(prefs)?;
        std::fs::write(&self.path, contents).map_err(write_err)
    }

    /// Persist the journal directory, keeping the stored colour.
    pub fn set_journal_path(&self, journal_path: impl Into<String>) -> Result<Preferences, PreferenceError> {
        let mut prefs = self.load()?;
        prefs.journal_path = Some(journal_path.into());
        self.save(&prefs)?;
        info!(path = ?prefs.journal_path, "Saved journal directory");
        Ok(prefs)
    }

    /// Persist the tag colour, keeping the stored directory.
    pub fn set_tag_color(&self, color: TagColor) -> Result<Preferences, PreferenceError> {
        let mut prefs = self.load()?;
        prefs.tag_color = Some(color);
        self.save(&prefs)?;
        info!(%color, "Saved tag colour");
        Ok(prefs)
    }
}
