//! Tag highlight colour.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default highlight colour for tags and links.
pub const DEFAULT_TAG_COLOR: TagColor = TagColor::rgb(0x4f, 0xa3, 0xe0);

/// Error returned when a colour string cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid colour {input:?}: expected #RRGGBB or #AARRGGBB")]
pub struct ColorParseError {
    /// The rejected input.
    pub input: String,
}

/// An opaque RGB colour applied to every tag and link span.
///
/// Parsed from `#RRGGBB` or `#AARRGGBB`. The alpha channel of the
/// eight-digit form is accepted and discarded. Always serialized as
/// lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagColor {
    r: u8,
    g: u8,
    b: u8,
}

impl TagColor {
    /// Build a colour from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for TagColor {
    fn default() -> Self {
        DEFAULT_TAG_COLOR
    }
}

impl FromStr for TagColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let rgb = match hex.len() {
            6 => hex,
            8 => &hex[2..],
            _ => return Err(err()),
        };

        let component = |i: usize| u8::from_str_radix(&rgb[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(component(0)?, component(2)?, component(4)?))
    }
}

impl TryFrom<String> for TagColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TagColor> for String {
    fn from(color: TagColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<TagColor> for ratatui::style::Color {
    fn from(color: TagColor) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

impl From<TagColor> for crossterm::style::Color {
    fn from(color: TagColor) -> Self {
        crossterm::style::Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}
