// src/consts.rs
//! Shared constants — alphabet, env var names and digest sizes

/// Every key character is drawn from these 52 ASCII letters
pub const KEY_ALPHABET: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Env var consumed by the blob-storage plugin for the Base64 key
pub const DEFAULT_KEY_ENV_VAR: &str = "AZURE_ENCRYPTION_KEY";

/// Env var consumed by the blob-storage plugin for the Base64 SHA-256 of the key
pub const DEFAULT_HASH_ENV_VAR: &str = "AZURE_ENCRYPTION_HASH";

pub const SHA256_LEN: usize = 32;
pub const MD5_LEN: usize = 16;
