//! Viewer state: the current snapshot, selection and status line.

use super::journal_list::JournalList;
use crate::integration::{title_for, JournalSnapshot};
use crate::model::DocumentOrigin;
use chrono::NaiveDate;

/// Everything the view needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    date: NaiveDate,
    origin: DocumentOrigin,
    list: JournalList,
    selected: Option<usize>,
    status: Option<String>,
}

impl AppState {
    /// State showing `snapshot` with the first line selected.
    pub fn new(snapshot: JournalSnapshot) -> Self {
        let mut state = Self {
            date: snapshot.date,
            origin: snapshot.document.origin().clone(),
            list: JournalList::new(),
            selected: None,
            status: None,
        };
        state.apply_snapshot(snapshot);
        state
    }

    /// Swap in a refreshed snapshot, keeping the selection in range.
    pub fn apply_snapshot(&mut self, snapshot: JournalSnapshot) {
        self.list
            .on_data_set_changed(&snapshot.document, snapshot.render);
        self.origin = snapshot.document.origin().clone();
        self.date = snapshot.date;

        let count = self.list.count();
        self.selected = match (self.selected, count) {
            (_, 0) => None,
            (Some(i), n) => Some(i.min(n - 1)),
            (None, _) => Some(0),
        };
    }

    /// Day being shown.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Title row text.
    pub fn title(&self) -> String {
        title_for(self.date)
    }

    /// Where the shown text came from.
    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }

    /// Rendered lines.
    pub fn list(&self) -> &JournalList {
        &self.list
    }

    /// Selected line, `None` when the list is empty.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Message replacing the footer hints, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Show `message` in the footer until cleared.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Restore the key hints.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Move the selection by `delta` lines, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.list.count();
        if count == 0 {
            self.selected = None;
            return;
        }

        let current = self.selected.unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(count - 1);
        self.selected = Some(target);
    }

    /// Select the first line.
    pub fn select_first(&mut self) {
        self.selected = (self.list.count() > 0).then_some(0);
    }

    /// Select the last line.
    pub fn select_last(&mut self) {
        self.selected = self.list.count().checked_sub(1);
    }
}
