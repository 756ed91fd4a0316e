//! Viewer state (pure, no terminal I/O).

pub mod app_state;
pub mod journal_list;

pub use app_state::AppState;
pub use journal_list::JournalList;
