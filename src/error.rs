//! Error types shared by the encoders.

use thiserror::Error;

/// Errors reported by the encoding operations.
///
/// Both variants indicate caller mistakes (malformed input or impossible
/// parameters); neither is transient and no partial result is ever produced
/// alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input contained a character other than `'0'`/`'1'`, or was empty
    /// where at least one data bit is required.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested Hamming block length cannot host a single data bit
    /// once its parity overhead is accounted for.
    #[error("block size too small: {0}")]
    BlockSizeTooSmall(String),
}

/// Result type for all operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
