//! Viewer styling.

use crate::model::SpanStyle;
use ratatui::style::{Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colours on regardless of the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colours off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ViewStyles =====

/// Styles for the fixed parts of the viewer.
///
/// Bold and reversed video are kept when colours are off; only foreground
/// colours are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyles {
    colors: ColorConfig,
    /// Title row.
    pub title: Style,
    /// Selected list row.
    pub selected: Style,
    /// Footer hints and status.
    pub footer: Style,
}

impl ViewStyles {
    /// Fixed styles for the given colour setting.
    pub fn new(colors: ColorConfig) -> Self {
        Self {
            colors,
            title: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            footer: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Style for a highlighted tag or link span.
    pub fn span(&self, style: SpanStyle) -> Style {
        let mut out = Style::default();
        if self.colors.colors_enabled() {
            out = out.fg(style.fg.into());
        }
        if style.bold {
            out = out.add_modifier(Modifier::BOLD);
        }
        out
    }
}

impl Default for ViewStyles {
    fn default() -> Self {
        Self::new(ColorConfig::enabled())
    }
}

// ===== Tests =====
