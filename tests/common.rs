//! tests/common.rs
//! Common constants and utilities shared across test files

use hmac::Hmac;
use pbkdf2_rs::PrfAlgorithm;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Fast iteration count for tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test password
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"password";

/// Standard test salt
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &[u8] = b"salt";

/// Common iteration count vectors for testing various iteration values
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATION_VALUES: &[u32] = &[1, 2, TEST_ITERATIONS, 10];

/// Independent PBKDF2 from the RustCrypto `pbkdf2` crate, used as an oracle.
#[allow(dead_code)] // Used across multiple test files
pub fn reference_pbkdf2(
    algorithm: PrfAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_length: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; key_length];
    match algorithm {
        PrfAlgorithm::Sha1 => pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, iterations, &mut out),
        PrfAlgorithm::Sha224 => {
            pbkdf2::pbkdf2::<Hmac<Sha224>>(password, salt, iterations, &mut out)
        }
        PrfAlgorithm::Sha256 => {
            pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut out)
        }
        PrfAlgorithm::Sha384 => {
            pbkdf2::pbkdf2::<Hmac<Sha384>>(password, salt, iterations, &mut out)
        }
        PrfAlgorithm::Sha512 => {
            pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut out)
        }
    }
    .unwrap();
    out
}
