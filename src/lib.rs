// src/lib.rs

//! PBKDF2 key derivation (RFC 2898 §5.2 / RFC 8018) with a pluggable
//! pseudo-random function.
//!
//! ```
//! use pbkdf2_rs::{derive_str, Pbkdf2Params};
//!
//! let params = Pbkdf2Params::new().with_iterations(1);
//! let key = derive_str("password", "salt", &params)?;
//! assert_eq!(
//!     key.to_hex(),
//!     "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
//! );
//! # Ok::<(), pbkdf2_rs::KdfError>(())
//! ```

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod deriver;
pub mod error;
pub mod key;
pub mod utils;

// High-level API: this is what most users import
pub use builders::pbkdf2_params::Pbkdf2Params;
pub use deriver::{derive, derive_key, derive_str};
pub use error::{KdfError, Result};
pub use key::DerivedKey;

// Bring-your-own-PRF API
pub use crypto::kdf::pbkdf2::{block_count, derive_pbkdf2_into, derive_pbkdf2_key};
pub use crypto::prf::{HmacPrf, Prf, PrfAlgorithm};
