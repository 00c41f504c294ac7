//! keygen — generate a random ASCII encryption key with its Base64 form and digest

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use encryption_keygen::{config, generate, render, DigestAlgorithm, KeyLength, OutputFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "keygen", version, about = "Generate a valid encryption key")]
struct Cli {
    /// Key length to generate
    #[arg(value_enum)]
    length: KeyLength,

    /// Digest applied to the raw key [default: from config, else sha256]
    #[arg(short, long, value_enum)]
    digest: Option<DigestAlgorithm>,

    /// Output format [default: from config, else table]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML config file; built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Exits with a usage error before any key is generated
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let conf = config::load(cli.config.as_deref()).context("Failed to load keygen config")?;
    let algorithm = cli.digest.unwrap_or(conf.defaults.digest);
    let format = cli.format.unwrap_or(conf.defaults.format);
    debug!(length = %cli.length, digest = %algorithm, format = %format, "resolved options");

    let material = generate(cli.length, algorithm);
    let text = render(&material, format, &conf.env).context("Failed to render key")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
