//! List model backing the journal view.
//!
//! Lines are formatted once per refresh; drawing a frame only reads them.
//! Positions are the item identity since lines may repeat.

use crate::format::{format_document, RenderConfig};
use crate::model::{DisplayLine, JournalDocument};

/// The rendered lines of the last refresh, addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalList {
    lines: Vec<DisplayLine>,
}

impl JournalList {
    /// An empty list, before the first refresh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a freshly read document.
    pub fn on_data_set_changed(&mut self, document: &JournalDocument, render: RenderConfig) {
        self.lines = format_document(document, &render);
    }

    /// Number of lines, one per source line.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// True before the first refresh.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered line at `position`; an empty line when out of range.
    pub fn view_at(&self, position: usize) -> DisplayLine {
        self.lines.get(position).cloned().unwrap_or_default()
    }

    /// Every line, rendered in order.
    pub fn views(&self) -> &[DisplayLine] {
        &self.lines
    }

    /// Identity of the line at `position`, which is the position itself.
    pub fn item_id(&self, position: usize) -> u64 {
        position as u64
    }

    /// Ids stay valid across refreshes that keep the line count.
    pub fn has_stable_ids(&self) -> bool {
        true
    }

    /// Every line is drawn with the same row layout.
    pub fn view_type_count(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlaceholderKind, TagColor};
    use std::path::PathBuf;

    fn document(text: &str) -> JournalDocument {
        JournalDocument::found(PathBuf::from("j.md"), text.to_string())
    }

    #[test]
    fn new_list_is_empty() {
        let list = JournalList::new();
        assert_eq!(list.count(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn count_matches_source_lines_including_trailing_empty() {
        let mut list = JournalList::new();
        list.on_data_set_changed(&document("- a\n- b\n"), RenderConfig::default());
        assert_eq!(list.count(), 3);
        assert_eq!(list.views().len(), 3);
    }

    #[test]
    fn view_at_formats_the_line() {
        let mut list = JournalList::new();
        let color = TagColor::rgb(3, 3, 3);
        list.on_data_set_changed(&document("  - see #x"), RenderConfig::new(color));

        let line = list.view_at(0);
        assert_eq!(line.text(), "  • see #x");
        assert_eq!(line.spans()[0].style.fg, color);
    }

    #[test]
    fn out_of_range_position_is_an_empty_line() {
        let mut list = JournalList::new();
        list.on_data_set_changed(&document("only"), RenderConfig::default());
        assert_eq!(list.view_at(5), DisplayLine::plain(""));
    }

    #[test]
    fn refresh_replaces_previous_lines() {
        let mut list = JournalList::new();
        list.on_data_set_changed(&document("a\nb\nc"), RenderConfig::default());
        list.on_data_set_changed(
            &JournalDocument::placeholder(PlaceholderKind::NotFound, "Today's journal not found."),
            RenderConfig::default(),
        );
        assert_eq!(list.count(), 1);
        assert_eq!(list.view_at(0).text(), "Today's journal not found.");
    }

    #[test]
    fn views_are_formatted_when_data_changes() {
        let mut list = JournalList::new();
        list.on_data_set_changed(&document("- [[a]]\n#b"), RenderConfig::default());

        let texts: Vec<&str> = list.views().iter().map(DisplayLine::text).collect();
        assert_eq!(texts, vec!["• a", "#b"]);
        assert_eq!(list.views()[0], list.view_at(0));
    }

    #[test]
    fn ids_are_positions_and_stable() {
        let mut list = JournalList::new();
        list.on_data_set_changed(&document("same\nsame"), RenderConfig::default());
        assert_eq!(list.item_id(0), 0);
        assert_eq!(list.item_id(1), 1);
        assert!(list.has_stable_ids());
        assert_eq!(list.view_type_count(), 1);
    }
}
