// src/crypto/mod.rs

//! Low-level crypto primitives: the PRF contract and the PBKDF2 core.
//!
//! See the crate root for re-exports. HMAC type aliases live in `aliases.rs`.

pub mod kdf;
pub mod prf;
