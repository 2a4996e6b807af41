//! Framing and frame parsing errors.

/// Errors raised when a payload cannot be split into chunks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FramerError {
    #[error("Payload is empty; there is nothing to transfer")]
    EmptyPayload,

    #[error("Maximum chunk size must be at least 1 (got {0})")]
    InvalidChunkSize(usize),
}

/// Errors raised when a frame string does not follow the wire format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("Frame has no '/' separating header from content")]
    MissingContentSeparator,

    #[error("Frame header '{header}' must have the form <index>:<total>:<checksum>")]
    MalformedHeader { header: String },

    #[error("Frame {field} '{value}' is not a decimal number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Frame index {index} is out of range for {total} chunk(s)")]
    IndexOutOfRange { index: usize, total: usize },
}
