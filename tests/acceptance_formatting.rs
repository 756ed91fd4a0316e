//! Acceptance tests for journal line rendering.
//!
//! Each test drives the public formatting API the way the viewer and
//! `--print` do and checks the rendered text and highlighted ranges.

use logseq_today::format::{format_document, format_line, RenderConfig, BULLET_GLYPH};
use logseq_today::model::{DisplayLine, JournalDocument, TagColor, DEFAULT_TAG_COLOR};
use logseq_today::source::JournalResolver;
use chrono::NaiveDate;
use std::path::PathBuf;

// ===== Test Helpers =====

fn render(line: &str) -> DisplayLine {
    format_line(line, BULLET_GLYPH, DEFAULT_TAG_COLOR)
}

/// Text under each span, in order.
fn highlighted(line: &DisplayLine) -> Vec<&str> {
    line.spans().iter().map(|span| line.span_text(span)).collect()
}

/// Number of bytes covered by spans.
fn covered(line: &DisplayLine) -> usize {
    line.spans().iter().map(|span| span.end - span.start).sum()
}

// ===== Structure =====

#[test]
fn empty_line_renders_empty() {
    let line = render("");
    assert_eq!(line.text(), "");
    assert!(line.spans().is_empty());
}

#[test]
fn plain_text_passes_through() {
    let line = render("  just some notes");
    assert_eq!(line.text(), "  just some notes");
    assert!(line.spans().is_empty());
}

#[test]
fn lone_hyphen_renders_empty() {
    assert_eq!(render("-").text(), "");
}

#[test]
fn indented_bullet_keeps_indentation() {
    assert_eq!(render("  - hello").text(), "  • hello");
}

#[test]
fn tab_indented_bullet_uses_four_spaces() {
    assert_eq!(render("\t- x").text(), "    • x");
}

// ===== Highlighting =====

#[test]
fn hashtag_keeps_text_and_is_highlighted() {
    let line = render("see #project today");
    assert_eq!(line.text(), "see #project today");
    assert_eq!(highlighted(&line), vec!["#project"]);
}

#[test]
fn page_link_drops_brackets() {
    let line = render("visit [[Home Page]] now");
    assert_eq!(line.text(), "visit Home Page now");
    assert_eq!(highlighted(&line), vec!["Home Page"]);
}

#[test]
fn tag_link_is_fully_highlighted() {
    let line = render("#[[Area]]");
    assert_eq!(line.text(), "#Area");
    assert_eq!(covered(&line), line.text().len());
}

#[test]
fn highlights_use_configured_color_and_bold() {
    let color = TagColor::rgb(0x12, 0x34, 0x56);
    let line = format_line("- #a [[b]]", BULLET_GLYPH, color);

    assert_eq!(line.text(), "• #a b");
    assert_eq!(highlighted(&line), vec!["#a", "b"]);
    for span in line.spans() {
        assert_eq!(span.style.fg, color);
        assert!(span.style.bold);
    }
}

#[test]
fn several_markups_on_one_bullet() {
    let line = render("\t- met [[Alice]] about #[[Q3 Plan]] and #budget");
    assert_eq!(line.text(), "    • met Alice about #Q3 Plan and #budget");
    assert_eq!(
        highlighted(&line).concat(),
        "Alice#Q3 Plan#budget",
        "every markup should be highlighted exactly once"
    );
}

#[test]
fn unclosed_link_is_left_alone() {
    let line = render("broken [[link");
    assert_eq!(line.text(), "broken [[link");
    assert!(line.spans().is_empty());
}

// ===== Documents =====

#[test]
fn line_breaks_give_one_display_line_each() {
    let document = JournalDocument::found(
        PathBuf::from("2026_10_18.md"),
        "- a\r\n- b\n\n#c\r".to_string(),
    );
    let lines = format_document(&document, &RenderConfig::default());

    // 4 breaks, 5 lines
    let texts: Vec<&str> = lines.iter().map(DisplayLine::text).collect();
    assert_eq!(texts, vec!["• a", "• b", "", "#c", ""]);
}

#[test]
fn missing_journal_renders_single_placeholder_line() {
    let graph = std::env::temp_dir().join("logseq_today_acceptance_missing");
    let _ = std::fs::remove_dir_all(&graph);
    std::fs::create_dir_all(graph.join("journals")).unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let document = JournalResolver::new(Some(graph)).read_for(date);
    let lines = format_document(&document, &RenderConfig::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "Today's journal not found.");
    assert!(lines[0].spans().is_empty());
}
