// src/key_ops.rs
//! Key generation and representation utilities
//!
//! This module generates random ASCII keys and derives the Base64 and
//! Base64-digest representations printed by the CLI.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;
use sha2::{Digest as _, Sha256};
use tracing::debug;

use crate::aliases::AsciiKey;
use crate::consts::KEY_ALPHABET;
use crate::enums::{DigestAlgorithm, KeyLength};

/// Generate a new random key from the thread-local RNG
#[inline]
pub fn generate_key(length: KeyLength) -> AsciiKey {
    generate_key_with(&mut rand::rng(), length)
}

/// Generate a key from a caller-supplied RNG
///
/// Each character is drawn uniformly, with replacement, from the 52 ASCII
/// letters. Seeded RNGs give reproducible keys.
pub fn generate_key_with<R: Rng>(rng: &mut R, length: KeyLength) -> AsciiKey {
    let key: String = (0..length.bytes())
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())] as char)
        .collect();

    debug!(length = %length, bytes = key.len(), "generated key");
    AsciiKey::new(key)
}

/// Hash `data` with the selected algorithm
pub fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Md5 => md5::compute(data).0.to_vec(),
    }
}

/// A generated key plus every representation the CLI prints
pub struct KeyMaterial {
    pub length: KeyLength,
    pub key: AsciiKey,
    pub key_base64: String,
    pub digest_algorithm: DigestAlgorithm,
    pub digest_base64: String,
}

impl KeyMaterial {
    #[inline]
    pub fn key_ascii(&self) -> &str {
        self.key.expose_secret()
    }
}

/// Derive the Base64 key and Base64 digest of an existing key
pub fn key_material(length: KeyLength, key: AsciiKey, algorithm: DigestAlgorithm) -> KeyMaterial {
    let (key_base64, digest_base64) = {
        let bytes = key.expose_secret().as_bytes();
        (STANDARD.encode(bytes), STANDARD.encode(digest(algorithm, bytes)))
    };

    KeyMaterial {
        length,
        key,
        key_base64,
        digest_algorithm: algorithm,
        digest_base64,
    }
}

/// Generate a fresh key and all of its representations
pub fn generate(length: KeyLength, algorithm: DigestAlgorithm) -> KeyMaterial {
    key_material(length, generate_key(length), algorithm)
}
