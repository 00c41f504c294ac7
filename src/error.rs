// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeygenError {
    #[error("invalid key length '{0}' (expected one of: bits128, bits192, bits256, bits384, bits512)")]
    InvalidLength(String),

    #[error("invalid digest algorithm '{0}' (expected one of: sha256, md5)")]
    InvalidDigest(String),

    #[error("invalid output format '{0}' (expected one of: table, env, json)")]
    InvalidFormat(String),

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeygenError>;
