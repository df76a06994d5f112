//! Clipboard text encoder

use crate::delimiter::Delimiter;
use crate::escape::quote;
use crate::options::{EncodeOptions, LineTerminator};

/// Encode a grid as clipboard text, rows separated by `\n`.
///
/// Every cell is quoted, whether or not it needs to be. Rows are joined, not
/// terminated, so there is no trailing newline. Accepts anything shaped like
/// rows of string-like cells, e.g. `&Grid` or `Vec<Vec<&str>>`.
///
/// ```rust
/// use duke_clip::{encode, Delimiter};
///
/// let text = encode(vec![vec!["a", "b\"c"], vec!["d"]], Delimiter::TAB);
/// assert_eq!(text, "\"a\"\t\"b\"\"c\"\n\"d\"");
/// ```
pub fn encode<G, R, C>(grid: G, delimiter: Delimiter) -> String
where
    G: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    encode_rows(grid, delimiter, LineTerminator::Lf)
}

/// Encode a grid as clipboard text using the given options
pub fn encode_with<G, R, C>(grid: G, options: &EncodeOptions) -> String
where
    G: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    encode_rows(grid, options.delimiter, options.line_terminator)
}

fn encode_rows<G, R, C>(grid: G, delimiter: Delimiter, terminator: LineTerminator) -> String
where
    G: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let mut out = String::new();

    for (row_idx, row) in grid.into_iter().enumerate() {
        if row_idx > 0 {
            out.push_str(terminator.as_str());
        }
        for (col_idx, cell) in row.into_iter().enumerate() {
            if col_idx > 0 {
                out.push(delimiter.as_char());
            }
            out.push_str(&quote(cell.as_ref()));
        }
    }

    out
}
