//! Error types for the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from core hexagram operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A pattern was not exactly six bits of 0 or 1.
    #[error("malformed hexagram pattern")]
    MalformedPattern,

    /// A King Wen number outside 1..=64.
    #[error("no hexagram numbered {0}")]
    UnknownHexagram(u8),

    /// A line sequence that is not exactly six lines.
    #[error("expected 6 lines, got {0}")]
    IncompleteLines(usize),
}
