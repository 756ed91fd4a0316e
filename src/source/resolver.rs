//! Date-based journal file lookup.

use crate::model::{JournalDocument, PlaceholderKind};
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the Logseq subfolder holding daily journals.
pub const JOURNALS_DIR: &str = "journals";

/// Why today's journal could not be read.
///
/// The `Display` text of each variant is the placeholder line shown in place
/// of the document.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No journal directory has been chosen.
    #[error("Please run the app to set the journal directory.")]
    NoDirectory,

    /// The chosen directory has no `journals` subfolder.
    #[error("Could not find 'journals' directory in the selected folder.")]
    MissingJournalsDir {
        /// The directory that was searched.
        directory: PathBuf,
    },

    /// The dated file does not exist.
    #[error("Today's journal not found.")]
    NotFound {
        /// The file that was looked for.
        path: PathBuf,
    },

    /// The file exists but is not UTF-8 text.
    #[error("Could not read the file.")]
    Unreadable {
        /// The file that was read.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("Error reading journal: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// Placeholder kind reported for this failure.
    pub fn kind(&self) -> PlaceholderKind {
        match self {
            ResolveError::NoDirectory => PlaceholderKind::NoDirectory,
            ResolveError::MissingJournalsDir { .. } => PlaceholderKind::MissingJournalsDir,
            ResolveError::NotFound { .. } => PlaceholderKind::NotFound,
            ResolveError::Unreadable { .. } => PlaceholderKind::Unreadable,
            ResolveError::Io { .. } => PlaceholderKind::Io,
        }
    }
}

/// File name of the journal for `date`, e.g. `2026_10_18.md`.
pub fn journal_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y_%m_%d"))
}

/// Resolves and reads the journal file for a date inside a Logseq graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalResolver {
    directory: Option<PathBuf>,
}

impl JournalResolver {
    /// `directory` is the Logseq graph root (the folder containing
    /// `journals/`), or `None` when none has been chosen.
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    /// Path the journal for `date` would live at, if a directory is set.
    pub fn journal_path(&self, date: NaiveDate) -> Option<PathBuf> {
        self.directory
            .as_ref()
            .map(|dir| dir.join(JOURNALS_DIR).join(journal_file_name(date)))
    }

    /// Read the journal text for `date`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] describing the first step that failed.
    pub fn resolve(&self, date: NaiveDate) -> Result<(PathBuf, String), ResolveError> {
        let directory = self.directory.as_ref().ok_or(ResolveError::NoDirectory)?;

        let journals = directory.join(JOURNALS_DIR);
        if !journals.is_dir() {
            return Err(ResolveError::MissingJournalsDir {
                directory: directory.clone(),
            });
        }

        let path = journals.join(journal_file_name(date));
        if !path.exists() {
            return Err(ResolveError::NotFound { path });
        }

        let bytes = std::fs::read(&path).map_err(|source| ResolveError::Io {
            path: path.clone(),
            source,
        })?;

        let text = String::from_utf8(bytes).map_err(|_| ResolveError::Unreadable {
            path: path.clone(),
        })?;

        debug!(path = %path.display(), bytes = text.len(), "Read journal file");
        Ok((path, text))
    }

    /// Read the journal for `date`, substituting a placeholder on failure.
    pub fn read_for(&self, date: NaiveDate) -> JournalDocument {
        match self.resolve(date) {
            Ok((path, text)) => JournalDocument::found(path, text),
            Err(err) => {
                warn!(kind = ?err.kind(), error = ?err, "Showing journal placeholder");
                JournalDocument::placeholder(err.kind(), err.to_string())
            }
        }
    }
}
