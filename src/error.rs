//! Crate error types

use thiserror::Error;

/// Errors surfaced by an evaluation trial
///
/// Failures are not recovered from here: a trial that cannot read its
/// data, write its checkpoint, or restore a snapshot is a failed trial,
/// and the outer optimization loop decides what to do with it.
#[derive(Debug, Error)]
pub enum Error {
    /// File I/O failure, including a missing checkpoint slot
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Checkpoint encoding or decoding failure
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Snapshot does not match the model it is being restored into
    #[error("state mismatch: {0}")]
    StateMismatch(String),
}

/// Result type for trial operations
pub type Result<T> = std::result::Result<T, Error>;
