// src/config/app.rs
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::defaults::*;
use crate::enums::{DigestAlgorithm, OutputFormat};
use crate::error::{KeygenError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_defaults")]
    pub defaults: Defaults,
    #[serde(default = "default_env_names")]
    pub env: EnvNames,
}

/// Fallbacks used when the matching CLI flag is absent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default)]
    pub digest: DigestAlgorithm,
    #[serde(default)]
    pub format: OutputFormat,
}

/// Variable names written by the `env` output format
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvNames {
    #[serde(default = "default_key_var")]
    pub key_var: String,
    #[serde(default = "default_hash_var")]
    pub hash_var: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            defaults: default_defaults(),
            env: default_env_names(),
        }
    }
}

/// Parse a config document; missing tables and fields take built-in defaults
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Read and parse the config file at `path`
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path).map_err(|source| KeygenError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    from_toml_str(&content)
}

/// Built-in defaults unless a config file was passed explicitly
///
/// Nothing is read from the filesystem or environment when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_from(path),
        None => Ok(Config::default()),
    }
}
