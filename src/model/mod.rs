//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod color;
pub mod display_line;
pub mod document;
pub mod error;
pub mod key_action;

pub use color::{ColorParseError, TagColor, DEFAULT_TAG_COLOR};
pub use display_line::{DisplayLine, Segment, SpanStyle, StyledSpan};
pub use document::{DocumentOrigin, JournalDocument, PlaceholderKind};
pub use error::AppError;
pub use key_action::KeyAction;
