//! Subcommand handlers
//!
//! Each handler returns `anyhow::Result`; `main` reports the error chain.

pub mod completions;
pub mod config;
pub mod frames;
pub mod send;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use qrcast::cli::TransferArgs;
use qrcast::transfer::{split, ChunkSet};
use qrcast::Config;

/// Read the payload from `file`, or from stdin when it is absent or `-`.
///
/// The payload must be valid UTF-8.
pub fn read_payload(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                bail!("File not found: {}", path.display());
            }
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        _ => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No payload: pass a FILE or pipe data on stdin");
            }
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    String::from_utf8(bytes).map_err(|e| {
        anyhow::anyhow!(
            "Payload is not valid UTF-8 (invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        )
    })
}

/// Load config, apply overrides, validate, and chunk the payload.
///
/// Everything that can be rejected is rejected here, before any UI opens.
pub fn prepare(
    transfer: &TransferArgs,
    overrides: impl FnOnce(&mut Config),
) -> Result<(Config, ChunkSet)> {
    let mut config = Config::load()?;
    overrides(&mut config);
    config.validate().context("Invalid settings")?;

    let payload = read_payload(transfer.file.as_deref())?;
    let chunks = split(&payload, config.transfer.max_chunk_size)?;
    tracing::info!(
        chunks = chunks.len(),
        chunk_size = chunks.chunk_size(),
        checksum = chunks.checksum(),
        "payload framed"
    );
    Ok((config, chunks))
}
