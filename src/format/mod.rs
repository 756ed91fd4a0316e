//! Journal-line rendering pipeline.
//!
//! Each source line goes through two pure steps:
//!
//! 1. [`structure::rewrite_structure`] - tab widening and bullet substitution
//! 2. [`styling::apply_styling`] - tag/link detection and span styling
//!
//! Lines are independent: there is no state carried from one line to the
//! next, so a document renders to exactly one [`DisplayLine`] per source line.

pub mod markup;
pub mod structure;
pub mod styling;

pub use markup::{MarkupKind, MarkupMatch};
pub use structure::{rewrite_structure, BULLET_GLYPH};
pub use styling::apply_styling;

use crate::model::{DisplayLine, JournalDocument, TagColor};

/// Read-only settings for one render pass.
///
/// Built once per refresh and never mutated by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Glyph that replaces a line's leading `-`.
    pub bullet_glyph: String,
    /// Colour of every tag and link span.
    pub tag_color: TagColor,
}

impl RenderConfig {
    /// Settings with the canonical bullet glyph and the given tag colour.
    pub fn new(tag_color: TagColor) -> Self {
        Self {
            bullet_glyph: BULLET_GLYPH.to_string(),
            tag_color,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(TagColor::default())
    }
}

/// Render one source line.
pub fn format_line(source_line: &str, bullet_glyph: &str, tag_color: TagColor) -> DisplayLine {
    let text = rewrite_structure(source_line, bullet_glyph);
    apply_styling(&text, tag_color)
}

/// Split document text into source lines on `\r\n`, `\n` or `\r`.
///
/// Text with N line breaks yields N + 1 lines, so a trailing newline
/// produces a trailing empty line and empty text yields one empty line.
pub fn split_source_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Render every line of a document.
pub fn format_document(document: &JournalDocument, config: &RenderConfig) -> Vec<DisplayLine> {
    split_source_lines(document.text())
        .into_iter()
        .map(|line| format_line(line, &config.bullet_glyph, config.tag_color))
        .collect()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
