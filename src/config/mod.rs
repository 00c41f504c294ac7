// src/config/mod.rs
//! Configuration system for encryption-keygen
//!
//! Optional TOML file, read only when passed with `--config`, with built-in
//! defaults for anything it leaves out.

pub use app::{from_toml_str, load, load_from, Config, Defaults, EnvNames};

mod app;
mod defaults;
