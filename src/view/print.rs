//! One-shot output: styled text or JSON on a writer.

use super::styles::ColorConfig;
use crate::integration::{title_for, JournalSnapshot};
use crate::model::{DisplayLine, DocumentOrigin};
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::{self, Write};

/// Write one rendered line per row, with ANSI styling when colours are on.
///
/// With colours off the output is plain text with no escape codes at all.
pub fn write_lines<W: Write>(
    out: &mut W,
    lines: &[DisplayLine],
    colors: ColorConfig,
) -> io::Result<()> {
    for line in lines {
        for segment in line.segments() {
            match segment.style {
                Some(style) if colors.colors_enabled() => {
                    let styled = segment.text.with(style.fg.into());
                    if style.bold {
                        write!(out, "{}", styled.bold())?;
                    } else {
                        write!(out, "{styled}")?;
                    }
                }
                _ => out.write_all(segment.text.as_bytes())?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    date: String,
    title: String,
    path: Option<String>,
    placeholder: bool,
    lines: &'a [DisplayLine],
}

/// Write the snapshot and its rendered lines as a single JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    snapshot: &JournalSnapshot,
    lines: &[DisplayLine],
) -> Result<(), serde_json::Error> {
    let path = match snapshot.document.origin() {
        DocumentOrigin::Found(path) => Some(path.display().to_string()),
        DocumentOrigin::Placeholder(_) => None,
    };

    let output = JsonOutput {
        date: snapshot.date.format("%Y-%m-%d").to_string(),
        title: title_for(snapshot.date),
        path,
        placeholder: snapshot.document.is_placeholder(),
        lines,
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out).map_err(serde_json::Error::io)
}
