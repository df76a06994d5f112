//! Codec options

use crate::delimiter::Delimiter;

/// Options for decoding clipboard text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Cell delimiter (default: tab)
    pub delimiter: Delimiter,
}

impl DecodeOptions {
    /// Set the cell delimiter
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Options for encoding a grid as clipboard text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Cell delimiter (default: tab)
    pub delimiter: Delimiter,
    /// Separator placed between rows (default: LF)
    pub line_terminator: LineTerminator,
}

impl EncodeOptions {
    /// Set the cell delimiter
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the row separator
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }
}

/// Row separator written by the encoder.
///
/// The decoder reads both forms as the same row boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    #[default]
    Lf,
    /// Windows-style (CRLF)
    CrLf,
}

impl LineTerminator {
    /// The separator text
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}
