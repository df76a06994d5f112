//! Clipboard codec error types

use thiserror::Error;

/// Result type for clipboard codec operations
pub type ClipResult<T> = std::result::Result<T, ClipError>;

/// Errors that can occur when configuring or driving the codec.
///
/// Decoding itself never fails: malformed quoting is resolved by the
/// scanner. Only delimiter construction and the stream helpers report errors.
#[derive(Debug, Error)]
pub enum ClipError {
    /// Delimiter string was empty
    #[error("Delimiter must be exactly one character, got an empty string")]
    EmptyDelimiter,

    /// Delimiter string held more than one character
    #[error("Delimiter must be exactly one character, got {0:?}")]
    MultiCharDelimiter(String),

    /// Delimiter collides with quoting or row syntax
    #[error("Delimiter {0:?} is reserved (quote and line break characters cannot separate cells)")]
    ReservedDelimiter(char),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
