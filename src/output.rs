// src/output.rs
//! Rendering of generated keys for stdout
//!
//! Everything returned here is SECRET: the raw key is printed in cleartext.

use serde_json::json;

use crate::config::EnvNames;
use crate::enums::OutputFormat;
use crate::error::Result;
use crate::key_ops::KeyMaterial;

pub const LABEL_KEY_ASCII: &str = "Key    (ASCII)";
pub const LABEL_KEY_B64: &str = "Key     (B64)";
pub const LABEL_HASH_B64: &str = "KeyHash (B64)";

/// Render `material` in `format`; the result always ends with a newline
pub fn render(material: &KeyMaterial, format: OutputFormat, env: &EnvNames) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(material)),
        OutputFormat::Env => Ok(render_env(material, env)),
        OutputFormat::Json => render_json(material),
    }
}

/// Three lines, each `<label>\t:\t<value>`
pub fn render_table(material: &KeyMaterial) -> String {
    format!(
        "{LABEL_KEY_ASCII}\t:\t{}\n{LABEL_KEY_B64}\t:\t{}\n{LABEL_HASH_B64}\t:\t{}\n",
        material.key_ascii(),
        material.key_base64,
        material.digest_base64,
    )
}

pub fn render_env(material: &KeyMaterial, env: &EnvNames) -> String {
    format!(
        "{}={}\n{}={}\n",
        env.key_var, material.key_base64, env.hash_var, material.digest_base64,
    )
}

pub fn render_json(material: &KeyMaterial) -> Result<String> {
    let doc = json!({
        "length": material.length.name(),
        "length_bits": material.length.bits(),
        "length_bytes": material.length.bytes(),
        "key_ascii": material.key_ascii(),
        "key_base64": material.key_base64,
        "digest_algorithm": material.digest_algorithm.name(),
        "digest_base64": material.digest_base64,
    });

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
