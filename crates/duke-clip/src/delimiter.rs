//! Cell delimiter

use std::fmt;
use std::str::FromStr;

use crate::error::{ClipError, ClipResult};
use crate::escape::QUOTE;

/// The single character separating cells within a row.
///
/// A `Delimiter` can only be built from a character that is distinguishable
/// from quoting and row syntax, so every value reaching the decoder or
/// encoder is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(char);

impl Delimiter {
    /// Horizontal tab, what spreadsheets put on the clipboard
    pub const TAB: Delimiter = Delimiter('\t');
    /// Comma
    pub const COMMA: Delimiter = Delimiter(',');
    /// Semicolon (common in locales using a decimal comma)
    pub const SEMICOLON: Delimiter = Delimiter(';');

    /// Create a delimiter, rejecting the quote and line break characters.
    pub fn new(c: char) -> ClipResult<Self> {
        if c == QUOTE || c == '\n' || c == '\r' {
            return Err(ClipError::ReservedDelimiter(c));
        }
        Ok(Delimiter(c))
    }

    /// The underlying character
    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::TAB
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ClipError;

    fn try_from(c: char) -> ClipResult<Self> {
        Delimiter::new(c)
    }
}

impl From<Delimiter> for char {
    fn from(d: Delimiter) -> char {
        d.0
    }
}

impl FromStr for Delimiter {
    type Err = ClipError;

    /// Parse a delimiter from exactly one character, or from one of the
    /// names `tab`, `comma`, `semicolon`, `pipe`, `space` (or a literal `\t`).
    fn from_str(s: &str) -> ClipResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tab" | "\\t" => return Ok(Delimiter::TAB),
            "comma" => return Ok(Delimiter::COMMA),
            "semicolon" => return Ok(Delimiter::SEMICOLON),
            "pipe" => return Ok(Delimiter('|')),
            "space" => return Ok(Delimiter(' ')),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ClipError::EmptyDelimiter),
            (Some(c), None) => Delimiter::new(c),
            (Some(_), Some(_)) => Err(ClipError::MultiCharDelimiter(s.to_string())),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            '\t' => f.write_str("\\t"),
            c => write!(f, "{c}"),
        }
    }
}
