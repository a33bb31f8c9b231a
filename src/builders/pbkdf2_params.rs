//! src/builders/pbkdf2_params.rs
//! PBKDF2 derivation parameters with named fields and documented defaults.

use crate::consts::{DEFAULT_ALGORITHM, DEFAULT_ITERATIONS, DEFAULT_KEY_LENGTH};
use crate::crypto::prf::PrfAlgorithm;
use crate::error::Result;

/// Everything PBKDF2 needs besides the password and salt.
///
/// | field        | default                     |
/// |--------------|-----------------------------|
/// | `iterations` | [`DEFAULT_ITERATIONS`] (20,000) |
/// | `key_length` | [`DEFAULT_KEY_LENGTH`] (32)     |
/// | `algorithm`  | [`DEFAULT_ALGORITHM`] (SHA256)  |
///
/// The defaults are a starting point, not a security guarantee: raise
/// `iterations` as hardware gets faster.
///
/// Values are checked at derivation time, not here, so a zero iteration count
/// or key length surfaces as [`KdfError::InvalidParameter`](crate::KdfError)
/// from [`derive`](crate::derive).
///
/// # Thread Safety
///
/// `Copy`, `Send` and `Sync`; one value can drive any number of concurrent
/// derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Pbkdf2Params {
    /// PRF applications chained per block (`c`).
    pub iterations: u32,
    /// Derived key length in bytes (`dkLen`).
    pub key_length: usize,
    /// Pseudo-random function.
    pub algorithm: PrfAlgorithm,
}

impl Pbkdf2Params {
    /// Parameters with the documented defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            key_length: DEFAULT_KEY_LENGTH,
            algorithm: DEFAULT_ALGORITHM,
        }
    }

    /// Set the iteration count.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the derived key length in bytes.
    #[must_use]
    pub const fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length;
        self
    }

    /// Set the PRF.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: PrfAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the PRF by identifier (`"SHA256"`, `"HMAC-SHA512"`, ...).
    ///
    /// # Errors
    ///
    /// [`KdfError::PrfUnavailable`](crate::KdfError::PrfUnavailable) for an
    /// unknown identifier.
    pub fn with_algorithm_name(self, name: &str) -> Result<Self> {
        Ok(self.with_algorithm(name.parse()?))
    }

    /// Number of PRF blocks these parameters produce.
    #[must_use]
    pub const fn blocks(&self) -> usize {
        crate::crypto::kdf::pbkdf2::block_count(self.key_length, self.algorithm.output_len())
    }
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self::new()
    }
}
