// src/config/defaults.rs
use crate::config::app::{Defaults, EnvNames};
use crate::consts::{DEFAULT_HASH_ENV_VAR, DEFAULT_KEY_ENV_VAR};
use crate::enums::{DigestAlgorithm, OutputFormat};

pub fn default_defaults() -> Defaults {
    Defaults {
        digest: DigestAlgorithm::default(),
        format: OutputFormat::default(),
    }
}

pub fn default_env_names() -> EnvNames {
    EnvNames {
        key_var: default_key_var(),
        hash_var: default_hash_var(),
    }
}

pub fn default_key_var() -> String {
    DEFAULT_KEY_ENV_VAR.into()
}

pub fn default_hash_var() -> String {
    DEFAULT_HASH_ENV_VAR.into()
}
