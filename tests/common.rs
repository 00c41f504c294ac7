// tests/common.rs
//! Shared test utilities — logging setup and fixtures

use encryption_keygen::{AsciiKey, DigestAlgorithm, KeyLength, KeyMaterial};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fixed 16-letter key with precomputed representations
pub const FIXED_KEY: &str = "ABCDEFGHIJKLMNOP";
pub const FIXED_KEY_B64: &str = "QUJDREVGR0hJSktMTU5PUA==";
pub const FIXED_KEY_SHA256_B64: &str = "5+i4nCch0pDMX1VCVJHs1oMTVekQY/ILOcIvnsanH5E=";
pub const FIXED_KEY_MD5_B64: &str = "GfyO/4IDfx/A2OodMrXjOQ==";

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

pub fn fixed_material(algorithm: DigestAlgorithm) -> KeyMaterial {
    encryption_keygen::key_material(
        KeyLength::Bits128,
        AsciiKey::new(FIXED_KEY.to_string()),
        algorithm,
    )
}
