//! Inline markup scanner for tags and links.
//!
//! Recognizes, in priority order at each position:
//!
//! 1. `#[[content]]` - compound tag-link
//! 2. `[[content]]` - link
//! 3. `#word` - tag, word = one or more of `[A-Za-z0-9_]`
//!
//! Content is everything up to the first following `]]`, any characters
//! allowed, possibly empty. Matches never overlap; scanning resumes after
//! each match.

/// Which markup form matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    /// `#[[content]]`
    TagLink,
    /// `[[content]]`
    Link,
    /// `#word`
    Tag,
}

/// One recognized markup token, in byte offsets of the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupMatch<'a> {
    /// Offset of the first byte of the token.
    pub start: usize,
    /// Offset one past the token.
    pub end: usize,
    /// Which form matched.
    pub kind: MarkupKind,
    /// Inner content for `TagLink`/`Link`, the whole `#word` for `Tag`.
    pub captured: &'a str,
}

const OPEN: &[u8] = b"[[";
const CLOSE: &[u8] = b"]]";

/// Scan a line left to right and return every match in forward order.
pub fn scan(line: &str) -> Vec<MarkupMatch<'_>> {
    let len = line.len();
    let last_close = line.rfind("]]");
    let mut matches = Vec::new();
    let mut pos = 0;

    // Every delimiter is ASCII, so stepping by byte never lands a match
    // start or end inside a multi-byte char.
    while pos < len {
        match match_at(line, pos, last_close) {
            Some(found) => {
                pos = found.end;
                matches.push(found);
            }
            None => pos += 1,
        }
    }

    matches
}

fn match_at(line: &str, pos: usize, last_close: Option<usize>) -> Option<MarkupMatch<'_>> {
    let bytes = line.as_bytes();

    if bytes[pos] != b'#' {
        return bracketed(line, pos, pos, MarkupKind::Link, last_close);
    }

    if let Some(found) = bracketed(line, pos, pos + 1, MarkupKind::TagLink, last_close) {
        return Some(found);
    }

    let word_len = bytes[pos + 1..]
        .iter()
        .take_while(|b| is_word_byte(**b))
        .count();
    if word_len == 0 {
        return None;
    }

    let end = pos + 1 + word_len;
    Some(MarkupMatch {
        start: pos,
        end,
        kind: MarkupKind::Tag,
        captured: &line[pos..end],
    })
}

/// Match `[[content]]` opening at `open`; the match itself begins at `start`.
///
/// `last_close` is the offset of the line's final `]]`. An opener past it
/// fails without searching, which keeps a run of unclosed `[` linear.
fn bracketed(
    line: &str,
    start: usize,
    open: usize,
    kind: MarkupKind,
    last_close: Option<usize>,
) -> Option<MarkupMatch<'_>> {
    let bytes = line.as_bytes();
    if !bytes.get(open..)?.starts_with(OPEN) {
        return None;
    }

    let content_start = open + OPEN.len();
    let last_close = last_close.filter(|&c| c >= content_start)?;
    let close = content_start
        + bytes[content_start..last_close + CLOSE.len()]
            .windows(CLOSE.len())
            .position(|w| w == CLOSE)?;

    Some(MarkupMatch {
        start,
        end: close + CLOSE.len(),
        kind,
        captured: &line[content_start..close],
    })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
