//! Clipboard text decoder

use crate::delimiter::Delimiter;
use crate::grid::Grid;
use crate::options::DecodeOptions;
use crate::split::Rows;

/// Decode clipboard text into a grid.
///
/// Never fails. Blank and whitespace-only lines are dropped; cells are
/// returned exactly as scanned, without trimming or type coercion.
///
/// ```rust
/// use duke_clip::{decode, Delimiter};
///
/// let grid = decode("\"a\"\"b\"\tc\n\nd", Delimiter::TAB);
/// assert_eq!(grid.cell(0, 0), Some("a\"b"));
/// assert_eq!(grid.cell(0, 1), Some("c"));
/// assert_eq!(grid.cell(1, 0), Some("d"));
/// assert_eq!(grid.len(), 2);
/// ```
pub fn decode(raw: &str, delimiter: Delimiter) -> Grid {
    let mut dropped = 0usize;
    let grid: Grid = Rows::new(raw, delimiter)
        .filter_map(|row| {
            if row.blank {
                dropped += 1;
                None
            } else {
                Some(row.cells)
            }
        })
        .collect();

    tracing::trace!(
        rows = grid.len(),
        dropped,
        delimiter = %delimiter,
        "decoded clipboard text"
    );
    grid
}

/// Decode clipboard text using the given options
pub fn decode_with(raw: &str, options: &DecodeOptions) -> Grid {
    decode(raw, options.delimiter)
}
