//! Rendered journal lines.
//!
//! A [`DisplayLine`] is plain text plus styled byte ranges. Renderers walk it
//! with [`DisplayLine::segments`] and never need to re-parse markup.

use super::color::TagColor;
use serde::Serialize;

/// Visual style applied to a span of a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpanStyle {
    /// Foreground colour.
    pub fg: TagColor,
    /// Whether the span is drawn bold.
    pub bold: bool,
}

impl SpanStyle {
    /// Bold text in the given colour, used for every tag and link.
    pub fn highlight(fg: TagColor) -> Self {
        Self { fg, bold: true }
    }
}

/// A styled byte range `[start, end)` within a display line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyledSpan {
    /// First byte of the span.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
    /// How the covered text is drawn.
    pub style: SpanStyle,
}

/// One rendered line: text plus ordered, non-overlapping styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    text: String,
    spans: Vec<StyledSpan>,
}

/// A run of text that shares one style (or none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The run's text.
    pub text: &'a str,
    /// Style of the run, `None` for unhighlighted text.
    pub style: Option<SpanStyle>,
}

impl DisplayLine {
    /// Build a line with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Build a line from text and spans.
    ///
    /// Spans are sorted by start offset. Empty spans, spans that do not lie
    /// on char boundaries inside the text, and spans overlapping an earlier
    /// one are dropped.
    pub fn new(text: impl Into<String>, spans: Vec<StyledSpan>) -> Self {
        let text = text.into();
        let mut spans = spans;
        spans.sort_by_key(|s| s.start);

        let mut kept: Vec<StyledSpan> = Vec::with_capacity(spans.len());
        for span in spans {
            let in_bounds = span.start < span.end
                && span.end <= text.len()
                && text.is_char_boundary(span.start)
                && text.is_char_boundary(span.end);
            let overlaps = kept.last().is_some_and(|prev| span.start < prev.end);
            if in_bounds && !overlaps {
                kept.push(span);
            }
        }

        Self { text, spans: kept }
    }

    /// The line's plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Styled ranges, ordered by start offset.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Text covered by a span.
    pub fn span_text(&self, span: &StyledSpan) -> &str {
        &self.text[span.start..span.end]
    }

    /// Split the line into consecutive styled and unstyled runs.
    ///
    /// Concatenating the runs' text reproduces [`DisplayLine::text`].
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut cursor = 0;

        for span in &self.spans {
            if span.start > cursor {
                out.push(Segment {
                    text: &self.text[cursor..span.start],
                    style: None,
                });
            }
            out.push(Segment {
                text: &self.text[span.start..span.end],
                style: Some(span.style),
            });
            cursor = span.end;
        }

        if cursor < self.text.len() {
            out.push(Segment {
                text: &self.text[cursor..],
                style: None,
            });
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SpanStyle {
        SpanStyle::highlight(TagColor::rgb(1, 2, 3))
    }

    fn span(start: usize, end: usize) -> StyledSpan {
        StyledSpan {
            start,
            end,
            style: style(),
        }
    }

    #[test]
    fn plain_line_has_single_unstyled_segment() {
        let line = DisplayLine::plain("hello");
        let segments = line.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "hello");
        assert_eq!(segments[0].style, None);
    }

    #[test]
    fn empty_line_has_no_segments() {
        assert!(DisplayLine::plain("").segments().is_empty());
    }

    #[test]
    fn segments_interleave_styled_and_plain_runs() {
        let line = DisplayLine::new("a #b c", vec![span(2, 4)]);
        let texts: Vec<_> = line.segments().iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["a ", "#b", " c"]);
        assert_eq!(line.segments()[1].style, Some(style()));
    }

    #[test]
    fn adjacent_spans_stay_separate() {
        let line = DisplayLine::new("#Area", vec![span(1, 5), span(0, 1)]);
        assert_eq!(line.spans().len(), 2);
        assert_eq!(line.span_text(&line.spans()[0]), "#");
        assert_eq!(line.span_text(&line.spans()[1]), "Area");
    }

    #[test]
    fn new_drops_empty_out_of_bounds_and_overlapping_spans() {
        let line = DisplayLine::new("abcdef", vec![span(0, 0), span(1, 4), span(2, 5), span(5, 99)]);
        assert_eq!(line.spans(), &[span(1, 4)]);
    }

    #[test]
    fn new_drops_spans_splitting_a_char() {
        let line = DisplayLine::new("•x", vec![span(1, 3)]);
        assert!(line.spans().is_empty());
    }

    #[test]
    fn serializes_text_and_spans() {
        let line = DisplayLine::new("#a", vec![span(0, 2)]);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["text"], "#a");
        assert_eq!(json["spans"][0]["start"], 0);
        assert_eq!(json["spans"][0]["end"], 2);
        assert_eq!(json["spans"][0]["style"]["fg"], "#010203");
        assert_eq!(json["spans"][0]["style"]["bold"], true);
    }
}
