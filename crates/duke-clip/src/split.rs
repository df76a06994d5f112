//! Row and cell splitter
//!
//! A two-state character scanner. Whether the scanner is inside a quoted span
//! is carried in [`ScanState`], never in sentinel text, so no input can be
//! mistaken for control syntax. Escaped quotes inside a quoted span are
//! collapsed with `escape::take_escaped_quote`, the rule [`escape::unescape`]
//! applies to whole strings.

use std::iter::Peekable;
use std::mem;
use std::str::Chars;

use crate::delimiter::Delimiter;
use crate::escape::{self, QUOTE};

/// One row as scanned, before blank rows are filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Cell values with quoting removed
    pub cells: Vec<String>,
    /// True when the row, read back as its cell values joined by the
    /// delimiter, is empty or whitespace only. Quoting does not count, so a
    /// row of quoted blank cells is blank.
    pub blank: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No character of the current cell consumed yet
    CellStart,
    /// Outside a quoted span, cell already started
    Unquoted,
    /// Inside a quoted span
    Quoted,
}

/// Lazy iterator over the rows of clipboard text.
///
/// `\r\n` is read as a single `\n` everywhere, quoted spans included. A lone
/// `\r` is ordinary text.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
    row: usize,
}

impl<'a> Rows<'a> {
    /// Start scanning `raw` with the given delimiter
    pub fn new(raw: &'a str, delimiter: Delimiter) -> Self {
        Self {
            chars: raw.chars().peekable(),
            delimiter: delimiter.as_char(),
            row: 0,
        }
    }

    fn finish_row(&mut self, cells: Vec<String>) -> RawRow {
        self.row += 1;
        let separators_blank = cells.len() == 1 || self.delimiter.is_whitespace();
        let blank = separators_blank
            && cells.iter().all(|cell| cell.chars().all(char::is_whitespace));
        RawRow { cells, blank }
    }

    /// Next character with `\r\n` folded into `\n`
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\r' && self.chars.peek() == Some(&'\n') {
            self.chars.next();
            return Some('\n');
        }
        Some(c)
    }
}

impl Iterator for Rows<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        self.chars.peek()?;

        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut state = ScanState::CellStart;

        while let Some(c) = self.next_char() {
            match state {
                ScanState::Quoted => {
                    if c != QUOTE {
                        cell.push(c);
                    } else if escape::take_escaped_quote(&mut self.chars) {
                        cell.push(QUOTE);
                    } else {
                        state = ScanState::Unquoted;
                    }
                }
                ScanState::CellStart | ScanState::Unquoted => {
                    if c == '\n' {
                        cells.push(cell);
                        return Some(self.finish_row(cells));
                    }
                    if c == self.delimiter {
                        cells.push(mem::take(&mut cell));
                        state = ScanState::CellStart;
                    } else if c == QUOTE && state == ScanState::CellStart {
                        state = ScanState::Quoted;
                    } else {
                        cell.push(c);
                        state = ScanState::Unquoted;
                    }
                }
            }
        }

        if state == ScanState::Quoted {
            tracing::debug!(
                row = self.row,
                cell = cells.len(),
                "unterminated quoted span closed at end of input"
            );
        }
        cells.push(cell);
        Some(self.finish_row(cells))
    }
}

/// Split raw clipboard text into rows of cells, blank rows included.
pub fn rows(raw: &str, delimiter: Delimiter) -> Rows<'_> {
    Rows::new(raw, delimiter)
}
