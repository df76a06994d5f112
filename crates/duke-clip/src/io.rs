//! Stream helpers

use std::io::{Read, Write};

use crate::decoder::decode_with;
use crate::encoder::encode_with;
use crate::error::ClipResult;
use crate::grid::Grid;
use crate::options::{DecodeOptions, EncodeOptions};

/// Read a whole stream of clipboard text and decode it.
///
/// The stream must be UTF-8; anything else is an [`std::io::ErrorKind::InvalidData`]
/// error.
pub fn read_grid<R: Read>(mut reader: R, options: &DecodeOptions) -> ClipResult<Grid> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    tracing::debug!(bytes = raw.len(), "read clipboard text");
    Ok(decode_with(&raw, options))
}

/// Encode a grid and write it to a stream
pub fn write_grid<G, R, C, W>(grid: G, mut writer: W, options: &EncodeOptions) -> ClipResult<()>
where
    G: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
    W: Write,
{
    let text = encode_with(grid, options);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    tracing::debug!(bytes = text.len(), "wrote clipboard text");
    Ok(())
}
