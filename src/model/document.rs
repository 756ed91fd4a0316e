//! One day's journal text as handed to the formatter.

use std::path::PathBuf;

/// Why a placeholder was shown instead of journal content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// No journal directory has been chosen yet.
    NoDirectory,
    /// The chosen directory has no `journals` subfolder.
    MissingJournalsDir,
    /// The dated file does not exist.
    NotFound,
    /// The file exists but its bytes are not UTF-8 text.
    Unreadable,
    /// Any other I/O failure.
    Io,
}

/// Where a document's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// Read from a journal file.
    Found(PathBuf),
    /// Substituted for the whole document because resolution failed.
    Placeholder(PlaceholderKind),
}

/// Raw text of one day's journal, read fresh on each refresh.
///
/// Placeholder documents are ordinary text as far as formatting goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDocument {
    text: String,
    origin: DocumentOrigin,
}

impl JournalDocument {
    /// Text read from the journal file at `path`.
    pub fn found(path: PathBuf, text: String) -> Self {
        Self {
            text,
            origin: DocumentOrigin::Found(path),
        }
    }

    /// A one-line stand-in shown when no journal could be read.
    pub fn placeholder(kind: PlaceholderKind, message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            origin: DocumentOrigin::Placeholder(kind),
        }
    }

    /// The text to format.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the text came from.
    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }

    /// True for substituted text.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.origin, DocumentOrigin::Placeholder(_))
    }
}
