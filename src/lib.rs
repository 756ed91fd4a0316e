//! Logseq Today
//!
//! Shows today's Logseq journal page in the terminal, with list bullets
//! normalized and tags and page links highlighted.
//!
//! The formatter ([`format`]) is a pure text transform; everything that
//! touches the filesystem, the terminal or other processes lives in the
//! shell modules around it.

pub mod config;
pub mod format;
pub mod integration;
pub mod launch;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
