//! Error types for relcheck

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failures the verification pipeline can encounter.
///
/// A remote resource that does not exist is not an error — lookups model it
/// as `Ok(None)`. The variants here cover the conditions that abort a call:
/// missing configuration, transport/protocol failures, and undecodable
/// content. Checks fold `Api` and `Content` into negative outcomes rather
/// than propagating them.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing credential or malformed configuration; fatal before any
    /// network call
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure or unexpected status from the hosting API
    #[error("hosting API error: {0}")]
    Api(String),

    /// File content could not be decoded
    #[error("content error: {0}")]
    Content(String),

    /// Report could not be persisted
    #[error("report error: {0}")]
    Report(String),
}
