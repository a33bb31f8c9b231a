//! src/crypto/kdf/pbkdf2.rs
//! PBKDF2 (RFC 8018 §5.2) over any keyed [`Prf`]: block chaining, XOR folding,
//! truncation to the requested length.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::consts::{MAX_BLOCKS, PBKDF2_MIN_ITER, RECOMMENDED_MIN_SALT_LEN};
use crate::crypto::prf::Prf;
use crate::error::{KdfError, Result};
use crate::key::DerivedKey;
use crate::utils::{block_index_be, xor_in_place};

/// Number of `h_len`-byte blocks needed to cover `key_length` bytes
/// (`ceil(key_length / h_len)`).
///
/// # Panics
///
/// Panics if `h_len == 0`.
#[inline]
#[must_use]
pub const fn block_count(key_length: usize, h_len: usize) -> usize {
    key_length.div_ceil(h_len)
}

fn validate(iterations: u32, key_length: usize, h_len: usize) -> Result<()> {
    if iterations < PBKDF2_MIN_ITER {
        return Err("PBKDF2 iterations must be ≥1".into());
    }
    if key_length == 0 {
        return Err("PBKDF2 key length must be ≥1".into());
    }
    if h_len == 0 {
        return Err(KdfError::PrfUnavailable(
            "PRF reports a zero-length output".into(),
        ));
    }
    if block_count(key_length, h_len) as u64 > MAX_BLOCKS {
        return Err(KdfError::InvalidParameter(format!(
            "derived key too long: {key_length} bytes exceeds (2^32 - 1) * {h_len}"
        )));
    }
    Ok(())
}

/// Function `F` of RFC 8018: `U_1 ^ U_2 ^ ... ^ U_c` for block `index`,
/// written into `out` (truncated when `out` is shorter than `hLen`).
///
/// `u`, `next` and the accumulator are local to this call and wiped on return.
fn compute_block<P: Prf + ?Sized>(
    prf: &P,
    salt: &[u8],
    iterations: u32,
    index: u32,
    out: &mut [u8],
) -> Result<()> {
    let h_len = prf.output_len();
    let mut u = Zeroizing::new(vec![0u8; h_len]);
    let mut next = Zeroizing::new(vec![0u8; h_len]);

    // U_1 = PRF(P, S || INT(i))
    let index_be = block_index_be(index);
    prf.apply(&[salt, index_be.as_slice()], u.as_mut_slice())?;
    let mut acc = u.clone();

    // U_k = PRF(P, U_{k-1}), T ^= U_k
    for _ in 1..iterations {
        prf.apply(&[u.as_slice()], next.as_mut_slice())?;
        std::mem::swap(&mut u, &mut next);
        xor_in_place(acc.as_mut_slice(), u.as_slice());
    }

    out.copy_from_slice(&acc[..out.len()]);
    trace!(block = index, "PBKDF2 block complete");
    Ok(())
}

/// Derive PBKDF2 key material into a caller-provided buffer.
///
/// The key length is `out.len()`. The password is the key `prf` was built
/// with. Blocks are independent: with the `parallel` feature they are computed
/// on the rayon pool, each writing only its own `hLen` slice of `out`.
///
/// # Errors
///
/// - [`KdfError::InvalidParameter`]: `iterations == 0`, `out` is empty, or
///   `out.len() > (2^32 - 1) * hLen`
/// - [`KdfError::PrfUnavailable`]: `prf.output_len() == 0`, or any error
///   returned by [`Prf::apply`]
///
/// Parameter errors leave `out` untouched. After a PRF failure the content of
/// `out` is unspecified and must be discarded.
pub fn derive_pbkdf2_into<P: Prf + ?Sized>(
    prf: &P,
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<()> {
    let h_len = prf.output_len();
    validate(iterations, out.len(), h_len)?;

    debug!(
        iterations,
        key_length = out.len(),
        h_len,
        blocks = block_count(out.len(), h_len),
        salt_len = salt.len(),
        "deriving PBKDF2 key"
    );
    if salt.len() < RECOMMENDED_MIN_SALT_LEN {
        warn!(
            salt_len = salt.len(),
            recommended = RECOMMENDED_MIN_SALT_LEN,
            "salt shorter than recommended"
        );
    }

    // Block indices are 1-based; validate() caps the count at u32::MAX.
    #[cfg(feature = "parallel")]
    let result = {
        // Workers log to the caller's subscriber, not the pool thread's.
        let dispatch = tracing::dispatcher::get_default(|d| d.clone());
        out.par_chunks_mut(h_len)
            .enumerate()
            .try_for_each(|(i, chunk)| {
                tracing::dispatcher::with_default(&dispatch, || {
                    compute_block(prf, salt, iterations, i as u32 + 1, chunk)
                })
            })
    };

    #[cfg(not(feature = "parallel"))]
    let result = out
        .chunks_mut(h_len)
        .enumerate()
        .try_for_each(|(i, chunk)| compute_block(prf, salt, iterations, i as u32 + 1, chunk));

    result
}

/// Derive a fresh [`DerivedKey`] of `key_length` bytes.
///
/// This is `derive(password, salt, iterations, keyLength, prf)` with the
/// password already bound into `prf`; see [`derive_pbkdf2_into`] for errors.
///
/// ```
/// use pbkdf2_rs::{derive_pbkdf2_key, HmacPrf};
/// use pbkdf2_rs::aliases::HmacSha256;
///
/// let prf = HmacPrf::<HmacSha256>::new(b"password")?;
/// let key = derive_pbkdf2_key(&prf, b"salt", 1, 32)?;
/// assert_eq!(
///     key.to_hex(),
///     "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
/// );
/// # Ok::<(), pbkdf2_rs::KdfError>(())
/// ```
pub fn derive_pbkdf2_key<P: Prf + ?Sized>(
    prf: &P,
    salt: &[u8],
    iterations: u32,
    key_length: usize,
) -> Result<DerivedKey> {
    // Validate before allocating the output.
    validate(iterations, key_length, prf.output_len())?;
    let mut key = DerivedKey::zeroed(key_length);
    derive_pbkdf2_into(prf, salt, iterations, key.expose_secret_mut())?;
    Ok(key)
}
