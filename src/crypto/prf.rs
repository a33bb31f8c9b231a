//! src/crypto/prf.rs
//! Pseudo-random functions for PBKDF2: the [`Prf`] contract, HMAC over any
//! RustCrypto hash, and runtime selection by algorithm name.

use std::fmt;
use std::str::FromStr;

use hmac::digest::{KeyInit, OutputSizeUser};
use hmac::Mac;

use crate::aliases::{HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha512};
use crate::error::{KdfError, Result};

/// A pseudo-random function already keyed with the password.
///
/// Implementations must be deterministic and always produce exactly
/// [`output_len`](Prf::output_len) bytes. `apply` takes `&self`, so an
/// implementation carrying incremental state must work on a private copy per
/// call: PBKDF2 may invoke one instance from several threads at once.
pub trait Prf: Send + Sync {
    /// Byte length of one PRF output (`hLen`).
    fn output_len(&self) -> usize;

    /// Compute `PRF(password, message)` where `message` is the concatenation
    /// of all `parts`, writing the result into `out`.
    ///
    /// `out.len()` must equal [`output_len`](Prf::output_len).
    ///
    /// # Errors
    ///
    /// A PRF backed by an external provider reports failure as
    /// [`KdfError::PrfUnavailable`]; the derivation stops and returns it.
    fn apply(&self, parts: &[&[u8]], out: &mut [u8]) -> Result<()>;
}

/// HMAC keyed once with the password.
///
/// The password is absorbed once in [`new`](HmacPrf::new). Every
/// [`apply`](Prf::apply) works on a clone of that keyed state.
#[derive(Clone)]
pub struct HmacPrf<M> {
    keyed: M,
}

impl<M> HmacPrf<M>
where
    M: Mac + KeyInit + Clone,
{
    /// Key the MAC with `password`.
    ///
    /// # Errors
    ///
    /// [`KdfError::PrfUnavailable`] if the MAC rejects the key. HMAC accepts
    /// keys of any length, so this only fires for exotic `Mac` types.
    pub fn new(password: &[u8]) -> Result<Self> {
        let keyed = <M as Mac>::new_from_slice(password)
            .map_err(|e| KdfError::PrfUnavailable(format!("cannot key PRF: {e}")))?;
        Ok(Self { keyed })
    }
}

impl<M> Prf for HmacPrf<M>
where
    M: Mac + KeyInit + Clone + Send + Sync,
{
    #[inline]
    fn output_len(&self) -> usize {
        <M as OutputSizeUser>::output_size()
    }

    #[inline]
    fn apply(&self, parts: &[&[u8]], out: &mut [u8]) -> Result<()> {
        let mut mac = self.keyed.clone();
        for part in parts {
            mac.update(part);
        }
        out.copy_from_slice(&mac.finalize().into_bytes());
        Ok(())
    }
}

impl<M> fmt::Debug for HmacPrf<M>
where
    M: OutputSizeUser,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacPrf")
            .field("output_len", &M::output_size())
            .finish_non_exhaustive()
    }
}

/// PRF selectable by name at call time.
///
/// Parsing via [`FromStr`] ignores case, `-`, `_`, spaces and an optional
/// `HMAC` prefix, so `"SHA256"`, `"sha-256"` and `"HMAC-SHA256"` all select
/// [`PrfAlgorithm::Sha256`]. [`Display`](fmt::Display) prints the canonical
/// name (`"SHA256"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum PrfAlgorithm {
    /// HMAC-SHA1, `hLen = 20`
    Sha1,
    /// HMAC-SHA224, `hLen = 28`
    Sha224,
    /// HMAC-SHA256, `hLen = 32`
    #[default]
    Sha256,
    /// HMAC-SHA384, `hLen = 48`
    Sha384,
    /// HMAC-SHA512, `hLen = 64`
    Sha512,
}

impl PrfAlgorithm {
    /// Every supported algorithm, weakest hash first.
    pub const ALL: [PrfAlgorithm; 5] = [
        PrfAlgorithm::Sha1,
        PrfAlgorithm::Sha224,
        PrfAlgorithm::Sha256,
        PrfAlgorithm::Sha384,
        PrfAlgorithm::Sha512,
    ];

    /// Canonical identifier, e.g. `"SHA256"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PrfAlgorithm::Sha1 => "SHA1",
            PrfAlgorithm::Sha224 => "SHA224",
            PrfAlgorithm::Sha256 => "SHA256",
            PrfAlgorithm::Sha384 => "SHA384",
            PrfAlgorithm::Sha512 => "SHA512",
        }
    }

    /// PRF output length in bytes (`hLen`).
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            PrfAlgorithm::Sha1 => 20,
            PrfAlgorithm::Sha224 => 28,
            PrfAlgorithm::Sha256 => 32,
            PrfAlgorithm::Sha384 => 48,
            PrfAlgorithm::Sha512 => 64,
        }
    }

    /// Build this algorithm's HMAC keyed with `password`.
    pub fn keyed(self, password: &[u8]) -> Result<Box<dyn Prf>> {
        let prf: Box<dyn Prf> = match self {
            PrfAlgorithm::Sha1 => Box::new(HmacPrf::<HmacSha1>::new(password)?),
            PrfAlgorithm::Sha224 => Box::new(HmacPrf::<HmacSha224>::new(password)?),
            PrfAlgorithm::Sha256 => Box::new(HmacPrf::<HmacSha256>::new(password)?),
            PrfAlgorithm::Sha384 => Box::new(HmacPrf::<HmacSha384>::new(password)?),
            PrfAlgorithm::Sha512 => Box::new(HmacPrf::<HmacSha512>::new(password)?),
        };
        Ok(prf)
    }
}

impl fmt::Display for PrfAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrfAlgorithm {
    type Err = KdfError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(*c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        let bare = normalized.strip_prefix("HMAC").unwrap_or(&normalized);

        match bare {
            "SHA1" => Ok(PrfAlgorithm::Sha1),
            "SHA224" => Ok(PrfAlgorithm::Sha224),
            "SHA256" => Ok(PrfAlgorithm::Sha256),
            "SHA384" => Ok(PrfAlgorithm::Sha384),
            "SHA512" => Ok(PrfAlgorithm::Sha512),
            _ => Err(KdfError::PrfUnavailable(format!(
                "unsupported PRF algorithm '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for PrfAlgorithm {
    type Error = KdfError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PrfAlgorithm> for String {
    fn from(algorithm: PrfAlgorithm) -> Self {
        algorithm.name().to_string()
    }
}
