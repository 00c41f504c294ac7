// src/lib.rs
//! encryption-keygen — random ASCII encryption keys for customer-provided-key storage
//!
//! Features:
//! - Five fixed key lengths (128–512 bits)
//! - Base64 key plus Base64 SHA-256 or MD5 digest of the key
//! - Table, env-file and JSON output

pub mod aliases;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod key_ops;
pub mod output;

// Re-export everything users need at the crate root
pub use aliases::AsciiKey;
pub use config::{load as load_config, Config};
pub use enums::{DigestAlgorithm, KeyLength, OutputFormat};
pub use error::{KeygenError, Result};
pub use key_ops::{digest, generate, generate_key, generate_key_with, key_material, KeyMaterial};
pub use output::render;
