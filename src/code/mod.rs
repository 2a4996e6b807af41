//! Optical code rendering.
//!
//! The player treats rendering as a black box behind [`CodeRenderer`]: a frame
//! string and an error correction level go in, a module grid comes out.
//! [`QrRenderer`] is the bundled QR code implementation, and [`CodeImage`]
//! rasterizes a grid into terminal half-block lines.

mod error;
mod image;
mod level;
mod qr;

pub use error::RenderError;
pub use image::{CodeImage, QUIET_ZONE_MODULES};
pub use level::ErrorCorrection;
pub use qr::QrRenderer;

/// Something that can turn a string into a scannable module grid.
pub trait CodeRenderer {
    /// Encode `data` at the given error correction level.
    fn render(&self, data: &str, level: ErrorCorrection) -> Result<CodeImage, RenderError>;

    /// Human-readable name for logs and errors.
    fn name(&self) -> &'static str;
}
