//! # duke-clip
//!
//! Decoder and encoder for the spreadsheet clipboard text format used by Excel
//! and LibreOffice: cells separated by a delimiter (tab by default), rows by
//! line breaks, and double quotes around any cell whose value holds a
//! delimiter, a quote, or a line break.
//!
//! - [`decode`] turns clipboard text into a [`Grid`]
//! - [`encode`] turns a grid back into clipboard text
//!
//! Both are pure functions with no shared state. For any grid without blank
//! rows, `decode(&encode(&grid, d), d) == grid`.
//!
//! ## Example
//!
//! ```rust
//! use duke_clip::{decode, encode, Delimiter};
//!
//! let grid = decode("name\tnote\nAda\t\"likes \"\"tabs\"\"\n\tand lines\"", Delimiter::TAB);
//! assert_eq!(grid.cell(1, 1), Some("likes \"tabs\"\n\tand lines"));
//!
//! let text = encode(&grid, Delimiter::TAB);
//! assert_eq!(decode(&text, Delimiter::TAB), grid);
//! ```

pub mod decoder;
pub mod delimiter;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod grid;
pub mod io;
pub mod options;
pub mod split;

pub use decoder::{decode, decode_with};
pub use delimiter::Delimiter;
pub use encoder::{encode, encode_with};
pub use error::{ClipError, ClipResult};
pub use escape::{escape, quote, unescape};
pub use grid::{Cell, Grid, Row};
pub use io::{read_grid, write_grid};
pub use options::{DecodeOptions, EncodeOptions, LineTerminator};
