//! tests/prf_tests.rs
//! PRF selection by name and the HMAC PRF contract

use pbkdf2_rs::aliases::{HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha512};
use pbkdf2_rs::{HmacPrf, KdfError, Prf, PrfAlgorithm};

#[test]
fn parses_canonical_and_loose_names() {
    let cases = [
        ("SHA256", PrfAlgorithm::Sha256),
        ("sha256", PrfAlgorithm::Sha256),
        ("SHA-256", PrfAlgorithm::Sha256),
        ("HMAC-SHA256", PrfAlgorithm::Sha256),
        ("hmac_sha256", PrfAlgorithm::Sha256),
        ("SHA1", PrfAlgorithm::Sha1),
        ("sha-1", PrfAlgorithm::Sha1),
        ("SHA224", PrfAlgorithm::Sha224),
        ("SHA-384", PrfAlgorithm::Sha384),
        ("HmacSha512", PrfAlgorithm::Sha512),
    ];

    for (name, expected) in cases {
        let parsed: PrfAlgorithm = name.parse().unwrap();
        assert_eq!(parsed, expected, "{name}");
    }
}

#[test]
fn rejects_unknown_names() {
    for name in ["NOT_A_HASH", "", "MD5", "SHA3-256", "HMAC", "SHA512256"] {
        let err = name.parse::<PrfAlgorithm>().unwrap_err();
        assert!(matches!(err, KdfError::PrfUnavailable(_)), "{name}: {err:?}");
    }
}

#[test]
fn display_round_trips() {
    for algorithm in PrfAlgorithm::ALL {
        let name = algorithm.to_string();
        assert_eq!(name, algorithm.name());
        assert_eq!(name.parse::<PrfAlgorithm>().unwrap(), algorithm);
        assert_eq!(String::from(algorithm), name);
        assert_eq!(PrfAlgorithm::try_from(name).unwrap(), algorithm);
    }
}

#[test]
fn default_is_sha256() {
    assert_eq!(PrfAlgorithm::default(), PrfAlgorithm::Sha256);
}

#[test]
fn declared_output_len_matches_keyed_prf() {
    for algorithm in PrfAlgorithm::ALL {
        let prf = algorithm.keyed(b"key").unwrap();
        assert_eq!(prf.output_len(), algorithm.output_len(), "{algorithm}");
    }

    assert_eq!(HmacPrf::<HmacSha1>::new(b"k").unwrap().output_len(), 20);
    assert_eq!(HmacPrf::<HmacSha224>::new(b"k").unwrap().output_len(), 28);
    assert_eq!(HmacPrf::<HmacSha256>::new(b"k").unwrap().output_len(), 32);
    assert_eq!(HmacPrf::<HmacSha384>::new(b"k").unwrap().output_len(), 48);
    assert_eq!(HmacPrf::<HmacSha512>::new(b"k").unwrap().output_len(), 64);
}

#[test]
fn hmac_prf_concatenates_parts() {
    let prf = HmacPrf::<HmacSha256>::new(b"password").unwrap();

    let mut split = [0u8; 32];
    prf.apply(
        &[b"sa".as_slice(), b"lt".as_slice(), [0u8, 0, 0, 1].as_slice()],
        &mut split,
    )
    .unwrap();

    let mut whole = [0u8; 32];
    prf.apply(&[b"salt\x00\x00\x00\x01".as_slice()], &mut whole).unwrap();

    assert_eq!(split, whole);
}

#[test]
fn hmac_prf_is_reusable_between_calls() {
    let prf = HmacPrf::<HmacSha256>::new(b"password").unwrap();

    let mut first = [0u8; 32];
    let mut second = [0u8; 32];
    prf.apply(&[b"message".as_slice()], &mut first).unwrap();
    prf.apply(&[b"other".as_slice()], &mut second).unwrap();
    prf.apply(&[b"message".as_slice()], &mut second).unwrap();

    assert_eq!(first, second, "previous apply must not leak into the next");
}

#[test]
fn hmac_prf_debug_hides_key_state() {
    let prf = HmacPrf::<HmacSha256>::new(b"super secret").unwrap();
    let debug = format!("{prf:?}");
    assert!(debug.contains("HmacPrf"));
    assert!(debug.contains("32"));
    assert!(!debug.contains("secret"));
}
