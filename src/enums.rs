// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: key length, digest
//! algorithm and output format. Each one parses from (and displays as) the
//! exact lowercase name accepted on the command line and in a `--config` file.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::{MD5_LEN, SHA256_LEN};
use crate::error::KeygenError;

/// Key length selector — each variant is bound to a fixed byte count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum KeyLength {
    #[value(name = "bits128")]
    Bits128,
    #[value(name = "bits192")]
    Bits192,
    #[value(name = "bits256")]
    Bits256,
    #[value(name = "bits384")]
    Bits384,
    #[value(name = "bits512")]
    Bits512,
}

impl KeyLength {
    pub const ALL: [KeyLength; 5] = [
        KeyLength::Bits128,
        KeyLength::Bits192,
        KeyLength::Bits256,
        KeyLength::Bits384,
        KeyLength::Bits512,
    ];

    /// Number of key characters (one byte each) to generate
    pub const fn bytes(self) -> usize {
        match self {
            KeyLength::Bits128 => 16,
            KeyLength::Bits192 => 24,
            KeyLength::Bits256 => 32,
            KeyLength::Bits384 => 48,
            KeyLength::Bits512 => 64,
        }
    }

    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }

    pub const fn name(self) -> &'static str {
        match self {
            KeyLength::Bits128 => "bits128",
            KeyLength::Bits192 => "bits192",
            KeyLength::Bits256 => "bits256",
            KeyLength::Bits384 => "bits384",
            KeyLength::Bits512 => "bits512",
        }
    }
}

impl fmt::Display for KeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyLength {
    type Err = KeygenError;

    /// Case-sensitive: `Bits128` and `BITS128` are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyLength::ALL
            .into_iter()
            .find(|len| len.name() == s)
            .ok_or_else(|| KeygenError::InvalidLength(s.to_owned()))
    }
}

/// Digest applied to the raw key bytes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    #[value(name = "sha256")]
    Sha256,
    #[value(name = "md5")]
    Md5,
}

impl DigestAlgorithm {
    /// Fixed digest size in bytes
    pub const fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => SHA256_LEN,
            DigestAlgorithm::Md5 => MD5_LEN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Md5 => "md5",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = KeygenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "md5" => Ok(DigestAlgorithm::Md5),
            other => Err(KeygenError::InvalidDigest(other.to_owned())),
        }
    }
}

/// How the generated key is written to stdout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three labeled lines: key, Base64 key, Base64 digest
    #[default]
    #[value(name = "table")]
    Table,
    /// `NAME=value` lines ready for a secrets file
    #[value(name = "env")]
    Env,
    #[value(name = "json")]
    Json,
}

impl OutputFormat {
    pub const fn name(self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Env => "env",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = KeygenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "env" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            other => Err(KeygenError::InvalidFormat(other.to_owned())),
        }
    }
}
