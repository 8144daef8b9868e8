//! The XSD `whiteSpace` facet as a pure string transform.
//!
//! # Examples
//!
//! ```
//! use xsd_lexical_core::WhiteSpace;
//!
//! assert_eq!(WhiteSpace::Replace.apply("a\tb\n"), "a b ");
//! assert_eq!(WhiteSpace::Collapse.apply("\t a b \r\n"), "a b");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::XsdError;

/// Whitespace handling mode of a string-like type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WhiteSpace {
    /// Leave the text untouched.
    #[default]
    Preserve,
    /// Turn each tab, line feed, and carriage return into a space.
    Replace,
    /// [`Replace`](WhiteSpace::Replace), then trim leading and trailing spaces.
    ///
    /// Interior runs of spaces are kept as they are.
    Collapse,
}

impl WhiteSpace {
    /// Applies this mode to `text`, borrowing when nothing changes.
    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Preserve => Cow::Borrowed(whitespace_preserve(text)),
            Self::Replace => whitespace_replace(text),
            Self::Collapse => whitespace_collapse(text),
        }
    }

    /// Facet value as written in a schema (`preserve`, `replace`, `collapse`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Replace => "replace",
            Self::Collapse => "collapse",
        }
    }
}

impl fmt::Display for WhiteSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WhiteSpace {
    type Err = XsdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preserve" => Ok(Self::Preserve),
            "replace" => Ok(Self::Replace),
            "collapse" => Ok(Self::Collapse),
            other => Err(XsdError::invalid_format("whiteSpace", other)),
        }
    }
}

/// Returns `text` unchanged.
pub fn whitespace_preserve(text: &str) -> &str {
    text
}

/// Replaces every `\t`, `\n`, and `\r` with a single space.
pub fn whitespace_replace(text: &str) -> Cow<'_, str> {
    if text.contains(is_replaced) {
        Cow::Owned(text.replace(is_replaced, " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Replaces tabs and line breaks with spaces, then trims leading and trailing
/// spaces.
// TODO: collapse interior runs of two or more spaces into one.
pub fn whitespace_collapse(text: &str) -> Cow<'_, str> {
    match whitespace_replace(text) {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(' ')),
        Cow::Owned(s) => Cow::Owned(s.trim_matches(' ').to_string()),
    }
}

fn is_replaced(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}
