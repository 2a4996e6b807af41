//! QR code renderer backed by the `qrcode` crate.

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use super::error::RenderError;
use super::image::CodeImage;
use super::level::ErrorCorrection;
use super::CodeRenderer;

/// Renders frames as QR codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrRenderer;

impl QrRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

impl CodeRenderer for QrRenderer {
    fn render(&self, data: &str, level: ErrorCorrection) -> Result<CodeImage, RenderError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), ec_level(level))
            .map_err(|e| match e {
                QrError::DataTooLong => RenderError::DataTooLong {
                    len: data.len(),
                    level,
                },
                other => RenderError::Failed {
                    renderer: self.name(),
                    message: other.to_string(),
                },
            })?;

        let dark = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        Ok(CodeImage::with_quiet_zone(code.width(), dark))
    }

    fn name(&self) -> &'static str {
        "qr"
    }
}
