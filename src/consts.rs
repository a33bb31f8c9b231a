//! # Constants
//!
//! Defaults and bounds for PBKDF2 derivation.

use crate::crypto::prf::PrfAlgorithm;

/// Minimum allowed PBKDF2 iteration count.
///
/// Must be at least `1`. Zero is rejected with
/// [`KdfError::InvalidParameter`](crate::KdfError::InvalidParameter).
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Default PBKDF2 iteration count used by [`Pbkdf2Params::default`](crate::Pbkdf2Params).
///
/// `20_000` is a configuration default, not a security guarantee. Hardware
/// gets faster every year: callers storing passwords should pick a higher
/// count from current guidance and raise it periodically.
pub const DEFAULT_ITERATIONS: u32 = 20_000;

/// Default derived key length in bytes (one AES-256 key).
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Default pseudo-random function: HMAC-SHA256.
pub const DEFAULT_ALGORITHM: PrfAlgorithm = PrfAlgorithm::Sha256;

/// Recommended minimum salt length in bytes.
///
/// Not enforced: the algorithm accepts salts of any length, including empty.
/// Shorter salts log a warning.
pub const RECOMMENDED_MIN_SALT_LEN: usize = 16;

/// Largest block index PBKDF2 can encode (`2^32 - 1`).
///
/// Bounds the derived key length to `MAX_BLOCKS * hLen` bytes.
pub const MAX_BLOCKS: u64 = u32::MAX as u64;
