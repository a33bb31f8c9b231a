//! # HMAC Type Aliases
//!
//! Concrete HMAC instantiations backing each [`PrfAlgorithm`](crate::PrfAlgorithm).
//!
//! - [`HmacSha1`] - HMAC-SHA1 (RFC 6070 test vectors, legacy interop)
//! - [`HmacSha224`] - HMAC-SHA224
//! - [`HmacSha256`] - HMAC-SHA256 (default)
//! - [`HmacSha384`] - HMAC-SHA384
//! - [`HmacSha512`] - HMAC-SHA512
//!
//! Any of these can be wrapped in [`HmacPrf`](crate::HmacPrf) directly when the
//! algorithm is known at compile time.

use hmac::Hmac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha224 = Hmac<Sha224>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha384 = Hmac<Sha384>;
pub type HmacSha512 = Hmac<Sha512>;
