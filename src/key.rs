//! # Derived Key
//!
//! Owned output of a PBKDF2 derivation. The bytes are zeroized on drop and
//! never printed by `Debug`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Derived key material, exactly as long as the requested key length.
///
/// Access the bytes with [`expose_secret`](DerivedKey::expose_secret).
/// Not `PartialEq`: compare exposed bytes explicitly, ideally in
/// constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey(Vec<u8>);

impl DerivedKey {
    pub(crate) fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    pub(crate) fn expose_secret_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Raw key bytes.
    #[must_use]
    pub fn expose_secret(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for keys returned by this crate (key length is ≥ 1).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encoding of the key.
    ///
    /// The returned `String` is not zeroized; prefer
    /// [`expose_secret`](DerivedKey::expose_secret) when the key stays in
    /// memory.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Move the bytes out into a buffer that is still wiped on drop.
    #[must_use]
    pub fn into_zeroizing(mut self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(std::mem::take(&mut self.0))
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([REDACTED; {} bytes])", self.0.len())
    }
}
