//! Utility functions used across the library.

/// XORs `src` into `acc` byte by byte (`acc[i] ^= src[i]`).
///
/// Operates on bytes only, so the result never depends on platform
/// endianness. LLVM auto-vectorizes the loop.
///
/// # Panics
///
/// Panics if `acc.len() != src.len()`. PBKDF2 always passes two `hLen`
/// buffers.
#[inline(always)]
pub fn xor_in_place(acc: &mut [u8], src: &[u8]) {
    assert_eq!(acc.len(), src.len(), "xor_in_place: length mismatch");
    for (a, s) in acc.iter_mut().zip(src) {
        *a ^= *s;
    }
}

/// `INT(i)` from RFC 8018: the block index as four big-endian bytes.
#[inline(always)]
pub const fn block_index_be(index: u32) -> [u8; 4] {
    index.to_be_bytes()
}
