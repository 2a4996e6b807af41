//! Frames command handler

use anyhow::{Context, Result};
use serde::Serialize;

use qrcast::cli::FramesArgs;
use qrcast::code::QrRenderer;
use qrcast::player::validate_frames;
use qrcast::transfer::ChunkSet;

use super::prepare;

/// JSON shape of `qrcast frames --json`.
#[derive(Debug, Serialize)]
struct FramesReport<'a> {
    checksum: &'a str,
    chunk_size: usize,
    total: usize,
    frames: Vec<String>,
}

impl<'a> FramesReport<'a> {
    fn new(chunks: &'a ChunkSet) -> Self {
        Self {
            checksum: chunks.checksum(),
            chunk_size: chunks.chunk_size(),
            total: chunks.len(),
            frames: chunks.frames().map(|f| f.to_string()).collect(),
        }
    }
}

/// Print every frame of the payload, checking each one renders.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &FramesArgs) -> Result<()> {
    let (config, chunks) = prepare(&args.transfer, |config| args.transfer.apply(config))?;
    validate_frames(&chunks, &QrRenderer, config.transfer.error_correction)
        .context("A frame does not fit in a QR code; lower --max-chunk-size or --ecl")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&FramesReport::new(&chunks))?);
    } else {
        for frame in chunks.frames() {
            println!("{}", frame);
        }
    }
    Ok(())
}
