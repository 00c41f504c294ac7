// src/aliases.rs
//! Secret wrappers used throughout encryption-keygen

use std::fmt;

use zeroize::Zeroizing;

/// Generated key, zeroized on drop and redacted in `Debug`
#[derive(Clone)]
pub struct AsciiKey(Zeroizing<String>);

impl AsciiKey {
    #[inline]
    pub fn new(key: String) -> Self {
        AsciiKey(Zeroizing::new(key))
    }

    #[inline]
    pub fn expose_secret(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AsciiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsciiKey([REDACTED; {} bytes])", self.0.len())
    }
}
