use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use encryption_keygen::{digest, generate, DigestAlgorithm, KeyLength};

use crate::common::{
    fixed_material, FIXED_KEY, FIXED_KEY_B64, FIXED_KEY_MD5_B64, FIXED_KEY_SHA256_B64,
};

#[test]
fn test_digest_known_vectors() {
    assert_eq!(
        STANDARD.encode(digest(DigestAlgorithm::Sha256, b"abc")),
        "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0="
    );
    assert_eq!(
        STANDARD.encode(digest(DigestAlgorithm::Md5, b"abc")),
        "kAFQmDzST7DWlj99KOF/cg=="
    );
}

#[test]
fn test_key_material_for_fixed_key_is_correct() {
    let sha = fixed_material(DigestAlgorithm::Sha256);
    assert_eq!(sha.key_ascii(), FIXED_KEY);
    assert_eq!(sha.key_base64, FIXED_KEY_B64);
    assert_eq!(sha.digest_base64, FIXED_KEY_SHA256_B64);

    let md5 = fixed_material(DigestAlgorithm::Md5);
    assert_eq!(md5.key_base64, FIXED_KEY_B64);
    assert_eq!(md5.digest_base64, FIXED_KEY_MD5_B64);
}

#[test]
fn test_base64_key_and_digest_round_trip_for_every_length() {
    for algorithm in [DigestAlgorithm::Sha256, DigestAlgorithm::Md5] {
        for length in KeyLength::ALL {
            let material = generate(length, algorithm);
            let raw = material.key_ascii().as_bytes();

            let decoded_key = STANDARD.decode(&material.key_base64).unwrap();
            assert_eq!(decoded_key, raw);

            let decoded_digest = STANDARD.decode(&material.digest_base64).unwrap();
            assert_eq!(decoded_digest.len(), algorithm.output_len());
            assert_eq!(decoded_digest, digest(algorithm, raw));
        }
    }
}

#[test]
fn test_bits128_scenario() {
    let sha = generate(KeyLength::Bits128, DigestAlgorithm::Sha256);
    assert_eq!(sha.key_ascii().len(), 16);
    assert_eq!(STANDARD.decode(&sha.key_base64).unwrap().len(), 16);
    assert_eq!(STANDARD.decode(&sha.digest_base64).unwrap().len(), 32);

    let md5 = generate(KeyLength::Bits128, DigestAlgorithm::Md5);
    assert_eq!(STANDARD.decode(&md5.digest_base64).unwrap().len(), 16);
}
