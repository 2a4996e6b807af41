//! Send command handler

use std::time::Instant;

use anyhow::{Context, Result};

use qrcast::cli::SendArgs;
use qrcast::code::QrRenderer;
use qrcast::player::render::template_renderer;
use qrcast::player::{run_sender, validate_frames, PlaybackController, SendOptions};
use qrcast::theme::current_theme;

use super::prepare;

/// Show the payload as looping QR codes until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &SendArgs) -> Result<()> {
    let (config, chunks) = prepare(&args.transfer, |config| args.apply(config))?;
    let level = config.transfer.error_correction;
    validate_frames(&chunks, &QrRenderer, level)
        .context("A frame does not fit in a QR code; lower --max-chunk-size or --ecl")?;

    let settings = config.playback.to_settings()?;
    let options = SendOptions {
        level,
        scale: usize::from(config.display.scale),
        progress_label: template_renderer(
            config.display.progress_label.clone(),
            chunks.checksum().to_string(),
        ),
    };
    let checksum = chunks.checksum().to_string();

    let mut controller = PlaybackController::new(chunks, settings, Instant::now())?;
    let outcome = run_sender(&mut controller, &QrRenderer, &options)?;

    let theme = current_theme();
    println!(
        "{}",
        theme.primary_text(&format!(
            "Sent {} chunk(s), checksum {}",
            outcome.total, checksum
        ))
    );
    Ok(())
}
