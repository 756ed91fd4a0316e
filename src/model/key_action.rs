//! Domain-level keyboard actions independent of key bindings.

/// Viewer actions that key bindings map to.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection movement
    /// Move the selection up one line. Default: k/↑
    ScrollUp,
    /// Move the selection down one line. Default: j/↓
    ScrollDown,
    /// Move the selection up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Move the selection down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first line. Default: g/Home
    ScrollToTop,
    /// Jump to the last line. Default: G/End
    ScrollToBottom,

    // Journal
    /// Re-read preferences and today's file. Default: r
    Refresh,
    /// Open Logseq from the selected line. Default: Enter
    OpenSelected,
    /// Open Logseq from the title. Default: o
    OpenFromTitle,

    // Application
    /// Exit the viewer. Default: q/Esc
    Quit,
}
