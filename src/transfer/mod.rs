//! Payload framing for one-way optical transfer.
//!
//! A payload is split into a [`ChunkSet`] of near-equal chunks that share a
//! single payload checksum. Each chunk is shipped as one frame string:
//!
//! ```text
//! <index>:<total>:<CHECKSUM>/<chunk content>
//! ```
//!
//! # Usage
//!
//! ```
//! use qrcast::transfer::{split, ParsedFrame};
//!
//! let chunks = split("hello world", 4).unwrap();
//! assert_eq!(chunks.len(), 3);
//!
//! let frame = chunks.frame(0).to_string();
//! let parsed = ParsedFrame::parse(&frame).unwrap();
//! assert_eq!(parsed.content, "hell");
//! ```

mod checksum;
mod chunk;
mod error;
mod frame;

pub use checksum::{checksum, CHECKSUM_LEN};
pub use chunk::{split, ChunkSet};
pub use error::{FrameError, FramerError};
pub use frame::{encode, Frame, ParsedFrame};
