//! Journal input source.
//!
//! Resolves the dated Markdown file inside a Logseq graph and reads it,
//! turning every failure into a single placeholder line.

pub mod resolver;

pub use resolver::{journal_file_name, JournalResolver, ResolveError, JOURNALS_DIR};
