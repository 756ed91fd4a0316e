//! Span substitution for recognized markup.
//!
//! All matches are collected over the structural-rewrite output first, then
//! substituted highest start offset first so the offsets of matches still
//! waiting to be applied stay valid.

use super::markup::{self, MarkupKind, MarkupMatch};
use crate::model::{DisplayLine, SpanStyle, StyledSpan, TagColor};

/// Replacement text for one match, with the styled ranges inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Replacement {
    start: usize,
    end: usize,
    text: String,
    /// Ranges relative to `text`.
    styled: Vec<(usize, usize)>,
}

impl Replacement {
    fn for_match(found: &MarkupMatch<'_>) -> Self {
        let (text, styled) = match found.kind {
            MarkupKind::TagLink => {
                let text = format!("#{}", found.captured);
                let len = text.len();
                (text, vec![(0, 1), (1, len)])
            }
            MarkupKind::Link | MarkupKind::Tag => {
                let text = found.captured.to_string();
                let len = text.len();
                (text, vec![(0, len)])
            }
        };

        Self {
            start: found.start,
            end: found.end,
            text,
            styled,
        }
    }
}

/// Style every tag and link in `line`, dropping link brackets.
pub fn apply_styling(line: &str, tag_color: TagColor) -> DisplayLine {
    let mut replacements: Vec<Replacement> = markup::scan(line)
        .iter()
        .map(Replacement::for_match)
        .collect();

    if replacements.is_empty() {
        return DisplayLine::plain(line);
    }

    replacements.sort_by(|a, b| b.start.cmp(&a.start));

    let style = SpanStyle::highlight(tag_color);
    let mut buffer = line.to_string();
    let mut spans: Vec<StyledSpan> = Vec::new();

    for replacement in &replacements {
        let removed = replacement.end - replacement.start;
        let inserted = replacement.text.len();
        buffer.replace_range(replacement.start..replacement.end, &replacement.text);

        // Spans placed so far all start at or after this replacement's end.
        for span in &mut spans {
            span.start = span.start - removed + inserted;
            span.end = span.end - removed + inserted;
        }

        spans.extend(
            replacement
                .styled
                .iter()
                .filter(|(from, to)| from < to)
                .map(|&(from, to)| StyledSpan {
                    start: replacement.start + from,
                    end: replacement.start + to,
                    style,
                }),
        );
    }

    DisplayLine::new(buffer, spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: TagColor = TagColor::rgb(0xff, 0x00, 0x00);

    fn styled_texts(line: &DisplayLine) -> Vec<&str> {
        line.spans().iter().map(|s| line.span_text(s)).collect()
    }

    #[test]
    fn plain_line_is_unchanged_and_unstyled() {
        let line = apply_styling("nothing to see", COLOR);
        assert_eq!(line.text(), "nothing to see");
        assert!(line.spans().is_empty());
    }

    #[test]
    fn tag_is_kept_and_styled() {
        let line = apply_styling("see #project today", COLOR);
        assert_eq!(line.text(), "see #project today");
        assert_eq!(styled_texts(&line), vec!["#project"]);
        assert_eq!(line.spans()[0].start, 4);
        assert_eq!(line.spans()[0].end, 12);
    }

    #[test]
    fn link_brackets_are_dropped() {
        let line = apply_styling("visit [[Home Page]] now", COLOR);
        assert_eq!(line.text(), "visit Home Page now");
        assert_eq!(styled_texts(&line), vec!["Home Page"]);
    }

    #[test]
    fn compound_renders_hash_and_content_as_two_spans() {
        let line = apply_styling("#[[Area]]", COLOR);
        assert_eq!(line.text(), "#Area");
        assert_eq!(styled_texts(&line), vec!["#", "Area"]);
    }

    #[test]
    fn spans_carry_bold_tag_color() {
        let line = apply_styling("#x", COLOR);
        assert_eq!(line.spans()[0].style, SpanStyle { fg: COLOR, bold: true });
    }

    #[test]
    fn later_spans_shift_when_earlier_links_shrink() {
        let line = apply_styling("[[a]] [[bb]] #c", COLOR);
        assert_eq!(line.text(), "a bb #c");
        assert_eq!(styled_texts(&line), vec!["a", "bb", "#c"]);
        let offsets: Vec<_> = line.spans().iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(offsets, vec![(0, 1), (2, 4), (5, 7)]);
    }

    #[test]
    fn empty_link_renders_nothing_and_has_no_span() {
        let line = apply_styling("a[[]]b", COLOR);
        assert_eq!(line.text(), "ab");
        assert!(line.spans().is_empty());
    }

    #[test]
    fn empty_compound_keeps_styled_hash() {
        let line = apply_styling("#[[]]", COLOR);
        assert_eq!(line.text(), "#");
        assert_eq!(styled_texts(&line), vec!["#"]);
    }

    #[test]
    fn multibyte_content_is_styled_on_char_boundaries() {
        let line = apply_styling("• [[日本]] #ü_tag", COLOR);
        assert_eq!(line.text(), "• 日本 #ü_tag");
        assert_eq!(styled_texts(&line), vec!["日本"]);
    }
}
