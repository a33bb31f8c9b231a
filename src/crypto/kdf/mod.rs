//! # Key Derivation Functions (KDF)
//!
//! - [`pbkdf2`] - PBKDF2 over any keyed [`Prf`](crate::Prf)
//!
//! Most callers want the high-level [`derive`](crate::derive) family, which
//! picks and keys the PRF for them. The functions here are for callers that
//! bring their own [`Prf`](crate::Prf) implementation or output buffer.

pub mod pbkdf2;
