//! Structural rewrite: tab widening and bullet substitution.

/// Canonical bullet glyph drawn in place of a leading Markdown hyphen.
pub const BULLET_GLYPH: &str = "\u{2022}";

/// Spaces substituted for each horizontal tab.
pub const TAB_SPACES: &str = "    ";

/// Rewrite one source line's structure.
///
/// Tabs become four spaces first. The trimmed line is then classified:
/// a lone `-` renders as nothing, a line starting with `-` keeps everything
/// before its first hyphen verbatim and replaces the hyphen (plus any
/// whitespace after it) with `bullet_glyph` and a single space. Anything
/// else passes through.
pub fn rewrite_structure(source_line: &str, bullet_glyph: &str) -> String {
    let line = source_line.replace('\t', TAB_SPACES);
    let trimmed = line.trim();

    if trimmed == "-" {
        return String::new();
    }

    if trimmed.starts_with('-') {
        // The trimmed text starts with '-', so the untrimmed line has one.
        if let Some(hyphen) = line.find('-') {
            let indentation = &line[..hyphen];
            let rest = line[hyphen + 1..].trim_start();
            return format!("{indentation}{bullet_glyph} {rest}");
        }
    }

    line
}
