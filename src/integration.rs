//! Refresh wiring between preferences, the resolver and the formatter.
//!
//! A refresh reads preferences once, resolves the journal for a date and
//! captures the render settings, so everything shown in one pass is
//! consistent.

use crate::config::ResolvedConfig;
use crate::format::RenderConfig;
use crate::model::{JournalDocument, TagColor};
use crate::prefs::{PreferenceStore, Preferences};
use crate::source::JournalResolver;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Inputs that stay fixed across refreshes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSettings {
    /// Where the saved directory and colour are read from.
    pub prefs_store: PreferenceStore,
    /// Directory that wins over the stored one.
    pub dir_override: Option<PathBuf>,
    /// Colour that wins over the stored one.
    pub color_override: Option<TagColor>,
}

impl RefreshSettings {
    /// Settings taken from the resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            prefs_store: PreferenceStore::new(&config.prefs_path),
            dir_override: config.journal_dir_override.clone(),
            color_override: config.tag_color_override,
        }
    }

    fn load_preferences(&self) -> Preferences {
        match self.prefs_store.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable preferences");
                Preferences::default()
            }
        }
    }
}

/// Everything one render pass needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalSnapshot {
    /// Day the journal belongs to.
    pub date: NaiveDate,
    /// The journal text, or a placeholder.
    pub document: JournalDocument,
    /// Glyph and colour to render with.
    pub render: RenderConfig,
}

/// Title shown above the journal, e.g. `Logseq Today 2026-10-18`.
pub fn title_for(date: NaiveDate) -> String {
    format!("Logseq Today {}", date.format("%Y-%m-%d"))
}

/// Read preferences and the journal for `date`.
pub fn refresh(settings: &RefreshSettings, date: NaiveDate) -> JournalSnapshot {
    let prefs = settings.load_preferences();

    let directory = settings
        .dir_override
        .clone()
        .or_else(|| prefs.journal_path.map(PathBuf::from));
    let tag_color = settings
        .color_override
        .or(prefs.tag_color)
        .unwrap_or_default();

    debug!(?directory, %tag_color, %date, "Refreshing journal");

    JournalSnapshot {
        date,
        document: JournalResolver::new(directory).read_for(date),
        render: RenderConfig::new(tag_color),
    }
}
