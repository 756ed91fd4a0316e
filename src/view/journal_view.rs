//! Frame layout: title row, journal list, footer.

use super::styles::ViewStyles;
use crate::model::DisplayLine;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Key hints shown when there is no status message.
pub const FOOTER_HINTS: &str = "r: refresh  enter: open Logseq  q: quit";

/// Convert a display line into ratatui spans.
pub fn to_line(line: &DisplayLine, styles: &ViewStyles) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .segments()
        .into_iter()
        .map(|segment| match segment.style {
            Some(style) => Span::styled(segment.text.to_string(), styles.span(style)),
            None => Span::raw(segment.text.to_string()),
        })
        .collect();
    Line::from(spans)
}

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    /// One-row title at the top.
    pub title: Rect,
    /// Journal lines, taking the remaining height.
    pub list: Rect,
    /// One-row footer at the bottom.
    pub footer: Rect,
}

/// Split `area` into title, list and footer rows.
pub fn layout(area: Rect) -> FrameAreas {
    let [title, list, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    FrameAreas {
        title,
        list,
        footer,
    }
}

/// Draw the whole viewer. Returns the list area height for paging.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    list_state: &mut ListState,
    styles: &ViewStyles,
) -> u16 {
    let areas = layout(frame.area());

    let title = Paragraph::new(state.title()).style(styles.title);
    frame.render_widget(title, areas.title);

    let items: Vec<ListItem> = state
        .list()
        .views()
        .iter()
        .map(|line| ListItem::new(to_line(line, styles)))
        .collect();
    let list = List::new(items).highlight_style(styles.selected);
    list_state.select(state.selected());
    frame.render_stateful_widget(list, areas.list, list_state);

    let footer = Paragraph::new(state.status().unwrap_or(FOOTER_HINTS)).style(styles.footer);
    frame.render_widget(footer, areas.footer);

    areas.list.height
}
