//! INI text codec
//!
//! Pure text <-> [`IniDocument`] conversion plus typed value coercion. Nothing
//! in this module touches the filesystem.

pub mod coerce;
mod document;
mod parser;
mod writer;

pub use document::{IniDocument, IniEntry};
pub use parser::{LineParser, parse, parse_lines};
pub use writer::{
    LineEnding, append_section, is_representable, serialize_section, serialize_sections,
};
