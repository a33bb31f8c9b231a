//! # Key Deriver
//!
//! High-level PBKDF2 entry points: pick the PRF by [`PrfAlgorithm`], key it
//! with the password once, and derive.

use tracing::debug;

use crate::builders::pbkdf2_params::Pbkdf2Params;
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_key;
use crate::crypto::prf::PrfAlgorithm;
use crate::error::Result;
use crate::key::DerivedKey;

/// Derive a key from raw password and salt bytes.
///
/// Pure and deterministic: identical inputs always give identical output.
///
/// # Errors
///
/// - [`KdfError::InvalidParameter`](crate::KdfError::InvalidParameter) for a
///   zero iteration count, a zero key length or a key that is too long
/// - [`KdfError::PrfUnavailable`](crate::KdfError::PrfUnavailable) if the PRF
///   cannot be keyed
///
/// # Example
///
/// ```
/// use pbkdf2_rs::{derive, Pbkdf2Params, PrfAlgorithm};
///
/// let params = Pbkdf2Params::new()
///     .with_iterations(2)
///     .with_key_length(20)
///     .with_algorithm(PrfAlgorithm::Sha1);
/// let key = derive(b"password", b"salt", &params)?;
/// assert_eq!(key.to_hex(), "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957");
/// # Ok::<(), pbkdf2_rs::KdfError>(())
/// ```
pub fn derive(password: &[u8], salt: &[u8], params: &Pbkdf2Params) -> Result<DerivedKey> {
    debug!(
        algorithm = %params.algorithm,
        iterations = params.iterations,
        key_length = params.key_length,
        "PBKDF2 derive"
    );
    let prf = params.algorithm.keyed(password)?;
    derive_pbkdf2_key(prf.as_ref(), salt, params.iterations, params.key_length)
}

/// Derive a key from text password and salt.
///
/// Both strings are encoded as UTF-8 before derivation. The encoding is part
/// of the contract: `derive_str(p, s, ..)` equals
/// `derive(p.as_bytes(), s.as_bytes(), ..)`.
pub fn derive_str(password: &str, salt: &str, params: &Pbkdf2Params) -> Result<DerivedKey> {
    derive(password.as_bytes(), salt.as_bytes(), params)
}

/// Derive a key with every parameter spelled out, the PRF chosen by name.
///
/// # Errors
///
/// Additionally fails with
/// [`KdfError::PrfUnavailable`](crate::KdfError::PrfUnavailable) when
/// `algorithm` is not a supported identifier (e.g. `"NOT_A_HASH"`).
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_length: usize,
    algorithm: &str,
) -> Result<DerivedKey> {
    let algorithm: PrfAlgorithm = algorithm.parse()?;
    let params = Pbkdf2Params::new()
        .with_iterations(iterations)
        .with_key_length(key_length)
        .with_algorithm(algorithm);
    derive(password, salt, &params)
}
