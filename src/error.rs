//! Error type for the document model.

use thiserror::Error;

/// Errors returned when addressing the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character range does not fit the rendered text.
    #[error("range {start}..{end} is outside the text (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
