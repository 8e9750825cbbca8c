//! INI text output

use std::fmt::Write as _;

/// Line terminator used when emitting text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// The platform convention (`\r\n` on Windows, `\n` elsewhere)
    #[default]
    Native,
    /// Always `\n`
    Lf,
    /// Always `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Emit one `[section]` block followed by a `key=value` line per field, in the
/// order supplied.
pub fn serialize_section<K, V>(section: &str, fields: &[(K, V)], line_ending: LineEnding) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    append_section(&mut out, section, fields, line_ending);
    out
}

/// Append one section block to `out` without touching what is already there
pub fn append_section<K, V>(out: &mut String, section: &str, fields: &[(K, V)], line_ending: LineEnding)
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let eol = line_ending.as_str();
    // Writing into a String cannot fail.
    let _ = write!(out, "[{section}]{eol}");
    for (key, value) in fields {
        let _ = write!(out, "{}={}{eol}", key.as_ref(), value.as_ref());
    }
}

/// Emit several section blocks separated by a blank line
pub fn serialize_sections<K, V>(
    sections: &[(String, Vec<(K, V)>)],
    line_ending: LineEnding,
) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (i, (section, fields)) in sections.iter().enumerate() {
        if i > 0 {
            out.push_str(line_ending.as_str());
        }
        append_section(&mut out, section, fields, line_ending);
    }
    out
}

/// True if a `key=value` line reads back as the same pair.
///
/// Nothing is quoted or escaped, so `=` or a line break on either side,
/// surrounding whitespace, or a key opening with `;` or `[` does not survive.
pub fn is_representable(key: &str, value: &str) -> bool {
    const BREAKING: [char; 3] = ['=', '\r', '\n'];

    !key.contains(BREAKING)
        && !value.contains(BREAKING)
        && key.trim() == key
        && value.trim() == value
        && !key.starts_with([';', '['])
}
