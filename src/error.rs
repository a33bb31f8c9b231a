//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T>`](Result), an alias for
//! `std::result::Result<T, KdfError>`.

use thiserror::Error;

/// The error type for all key derivation operations.
///
/// Every error is raised synchronously and no partial key is ever returned:
/// a call either produces the full requested key or one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdfError {
    /// A derivation parameter is out of range.
    ///
    /// Raised for:
    /// - an iteration count of zero
    /// - a requested key length of zero
    /// - a requested key length above `(2^32 - 1) * hLen`
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested pseudo-random function cannot be provided.
    ///
    /// Raised for unknown algorithm identifiers (e.g. `"NOT_A_HASH"`), for a
    /// PRF that refuses the password as a key, or for a PRF that reports a
    /// zero-length output.
    #[error("PRF unavailable: {0}")]
    PrfUnavailable(String),
}

impl From<&'static str> for KdfError {
    fn from(msg: &'static str) -> Self {
        KdfError::InvalidParameter(msg.to_string())
    }
}

/// Result alias used by every public function in this crate.
pub type Result<T> = std::result::Result<T, KdfError>;
