//! Code rendering errors.

use super::level::ErrorCorrection;

/// Errors that can occur while encoding a frame into an optical code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(
        "Frame of {len} bytes does not fit in a QR code at level {level}; lower the maximum chunk size or the error correction level"
    )]
    DataTooLong { len: usize, level: ErrorCorrection },

    #[error("Code renderer '{renderer}' failed: {message}")]
    Failed {
        renderer: &'static str,
        message: String,
    },
}
