use std::io;

use thiserror::Error;

/// Errors reported by [`LineBuffer`](crate::LineBuffer).
#[derive(Error, Debug)]
pub enum LineBufferError {
    /// `set_destination` was called without a sink; the previous destination
    /// is still in place.
    #[error("destination sink is absent")]
    MissingDestination,
    /// The destination rejected the flushed bytes; the buffered content is
    /// still in place.
    #[error("failed to write to destination: {0}")]
    Io(#[from] io::Error),
}
