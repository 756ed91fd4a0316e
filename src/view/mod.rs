//! TUI rendering and terminal management (impure shell)

pub mod journal_view;
pub mod print;
mod styles;

pub use styles::{ColorConfig, ViewStyles};

use crate::config::KeyBindings;
use crate::integration::{self, RefreshSettings};
use crate::launch::{LaunchTarget, Launcher};
use crate::model::KeyAction;
use crate::state::AppState;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::ListState,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// How long the event loop waits for input before checking timers.
const TICK: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Everything the viewer needs besides a terminal.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// Where each refresh reads from.
    pub settings: RefreshSettings,
    /// Show this date instead of following the local clock.
    pub pinned_date: Option<NaiveDate>,
    /// Opens Logseq on Enter.
    pub launcher: Launcher,
    /// `None` disables periodic refresh.
    pub refresh_interval: Option<Duration>,
    /// Whether to draw foreground colours.
    pub colors: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    list_state: ListState,
    settings: RefreshSettings,
    pinned_date: Option<NaiveDate>,
    launcher: Launcher,
    key_bindings: KeyBindings,
    styles: ViewStyles,
    refresh_interval: Option<Duration>,
    last_refresh: Instant,
    /// Height of the list area at the last draw, used for paging.
    page_height: u16,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the viewer on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(options: ViewerOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, options))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            } else if self.tick(Local::now().date_naive()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the viewer on any backend and load the first snapshot.
    pub fn with_terminal(terminal: Terminal<B>, options: ViewerOptions) -> Self {
        let ViewerOptions {
            settings,
            pinned_date,
            launcher,
            refresh_interval,
            colors,
        } = options;

        let date = pinned_date.unwrap_or_else(|| Local::now().date_naive());
        let state = AppState::new(integration::refresh(&settings, date));

        Self {
            terminal,
            state,
            list_state: ListState::default(),
            settings,
            pinned_date,
            launcher,
            key_bindings: KeyBindings::default(),
            styles: ViewStyles::new(colors),
            refresh_interval,
            last_refresh: Instant::now(),
            page_height: 0,
        }
    }

    /// Current viewer state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draw one frame and remember the list height for paging.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let list_state = &mut self.list_state;
        let styles = &self.styles;
        let mut list_height = 0;

        self.terminal.draw(|frame| {
            list_height = journal_view::render(frame, state, list_state, styles);
        })?;

        self.page_height = list_height;
        Ok(())
    }

    /// Handle one key event. Returns true when the viewer should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        let page = self.page_height.max(1) as isize;
        match action {
            KeyAction::Quit => return true,
            KeyAction::ScrollUp => self.state.move_selection(-1),
            KeyAction::ScrollDown => self.state.move_selection(1),
            KeyAction::PageUp => self.state.move_selection(-page),
            KeyAction::PageDown => self.state.move_selection(page),
            KeyAction::ScrollToTop => self.state.select_first(),
            KeyAction::ScrollToBottom => self.state.select_last(),
            KeyAction::Refresh => {
                self.refresh();
                self.state.set_status("Refreshed");
            }
            KeyAction::OpenSelected => {
                let position = self.state.selected().unwrap_or(0);
                self.open_logseq(LaunchTarget::Line(position));
            }
            KeyAction::OpenFromTitle => self.open_logseq(LaunchTarget::Title),
        }
        false
    }

    /// Re-read preferences and the journal for the current date.
    pub fn refresh(&mut self) {
        let date = self
            .pinned_date
            .unwrap_or_else(|| Local::now().date_naive());
        self.refresh_for(date);
    }

    fn refresh_for(&mut self, date: NaiveDate) {
        let snapshot = integration::refresh(&self.settings, date);
        let placeholder = snapshot.document.is_placeholder();
        self.state.apply_snapshot(snapshot);
        self.last_refresh = Instant::now();
        info!(%date, lines = self.state.list().count(), placeholder, "Journal refreshed");
    }

    /// Timer work between key presses. Returns true when a redraw is needed.
    ///
    /// `today` is the local date; it is ignored while a date is pinned.
    pub fn tick(&mut self, today: NaiveDate) -> bool {
        let date = self.pinned_date.unwrap_or(today);

        if date != self.state.date() {
            info!(from = %self.state.date(), to = %date, "Date changed");
            self.refresh_for(date);
            return true;
        }

        match self.refresh_interval {
            Some(interval) if self.last_refresh.elapsed() >= interval => {
                self.refresh_for(date);
                true
            }
            _ => false,
        }
    }

    fn open_logseq(&mut self, target: LaunchTarget) {
        match self.launcher.launch(target) {
            Ok(()) => self.state.clear_status(),
            Err(e) => {
                warn!(error = %e, ?target, "Could not open Logseq");
                self.state.set_status(format!("Could not open Logseq: {e}"));
            }
        }
    }
}

/// Initialize and run the viewer
///
/// Handles terminal setup, runs the event loop, and always restores the
/// terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_viewer(options: ViewerOptions) -> Result<(), TuiError> {
    let result = TuiApp::new(options).and_then(|mut app| app.run());

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
