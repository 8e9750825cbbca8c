//! Line-oriented INI parser
//!
//! Every line is trimmed, then classified in order:
//!
//! 1. blank, or starting with `;` - skipped
//! 2. `[name]` - opens section `name` (inner whitespace trimmed)
//! 3. exactly one `=` - `key = value` under the current section
//! 4. anything else - [`Error::MalformedLine`], and the whole parse is abandoned

use super::document::IniDocument;
use crate::error::{Error, Result};

const COMMENT_PREFIX: char = ';';

/// Incremental parser fed one line at a time.
///
/// Used directly when streaming a large file, and by [`parse`] /
/// [`parse_lines`] for in-memory input, so both paths share one rule set.
/// The first malformed line poisons the parser: later lines are rejected with
/// the same error and [`LineParser::finish`] never hands out the partial
/// document.
#[derive(Debug, Default)]
pub struct LineParser {
    document: IniDocument,
    section: String,
    line_number: usize,
    /// Line number and text of the first malformed line
    failure: Option<(usize, String)>,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and apply one line of input
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLine`] for a malformed line, and again for
    /// every line fed after it.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        if let Some(failure) = &self.failure {
            return Err(malformed(failure));
        }
        self.line_number += 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return Ok(());
        }

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            self.section = line[1..line.len() - 1].trim().to_string();
            return Ok(());
        }

        if line.matches('=').count() == 1 {
            if let Some((key, value)) = line.split_once('=') {
                self.document
                    .insert(self.section.as_str(), key.trim(), value.trim());
                return Ok(());
            }
        }

        let failure = (self.line_number, line.to_string());
        let err = malformed(&failure);
        self.failure = Some(failure);
        Err(err)
    }

    /// True once a malformed line has been fed
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Finish parsing and hand over the document
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::MalformedLine`] if any fed line was
    /// malformed; the partial document is dropped.
    pub fn finish(self) -> Result<IniDocument> {
        match &self.failure {
            Some(failure) => Err(malformed(failure)),
            None => Ok(self.document),
        }
    }
}

fn malformed((line_number, line): &(usize, String)) -> Error {
    Error::MalformedLine {
        line_number: *line_number,
        line: line.clone(),
    }
}

/// Parse a complete INI text
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] for the first line that is not blank, a
/// comment, a section header or a single-`=` assignment.
pub fn parse(text: &str) -> Result<IniDocument> {
    parse_lines(text.lines())
}

/// Parse an already materialized sequence of lines
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_lines<I, S>(lines: I) -> Result<IniDocument>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LineParser::new();
    for line in lines {
        parser.feed_line(line.as_ref())?;
    }
    parser.finish()
}
