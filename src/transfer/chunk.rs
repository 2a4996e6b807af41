//! Splitting a payload into a balanced set of chunks.
//!
//! Chunk lengths are measured in `char`s, so a chunk boundary never falls
//! inside a multi-byte code point.

use super::checksum::checksum;
use super::error::FramerError;
use super::frame::Frame;

/// An ordered, rebalanced split of one payload plus its checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSet {
    chunks: Vec<String>,
    checksum: String,
    chunk_size: usize,
    payload_chars: usize,
    payload_bytes: usize,
}

/// Split `payload` into chunks of at most `max_chunk_size` characters.
///
/// The number of chunks is `ceil(len / max_chunk_size)`. The chunk size is
/// then recomputed as `ceil(len / count)` so all chunks are as equal as
/// possible, rather than leaving a tiny trailing chunk. Only the last chunk
/// may be shorter.
///
/// # Errors
/// * [`FramerError::InvalidChunkSize`] if `max_chunk_size` is zero
/// * [`FramerError::EmptyPayload`] if `payload` is empty
pub fn split(payload: &str, max_chunk_size: usize) -> Result<ChunkSet, FramerError> {
    if max_chunk_size == 0 {
        return Err(FramerError::InvalidChunkSize(max_chunk_size));
    }

    let len = payload.chars().count();
    if len == 0 {
        return Err(FramerError::EmptyPayload);
    }

    let count = len.div_ceil(max_chunk_size);
    let chunk_size = len.div_ceil(count);

    let mut chunks = Vec::with_capacity(count);
    let mut current = String::with_capacity(chunk_size);
    let mut current_len = 0usize;

    for c in payload.chars() {
        current.push(c);
        current_len += 1;
        if current_len == chunk_size {
            chunks.push(std::mem::replace(
                &mut current,
                String::with_capacity(chunk_size),
            ));
            current_len = 0;
        }
    }
    if current_len > 0 {
        chunks.push(current);
    }

    tracing::debug!(
        chars = len,
        max_chunk_size,
        chunk_size,
        chunks = chunks.len(),
        "split payload"
    );

    Ok(ChunkSet {
        chunks,
        checksum: checksum(payload),
        chunk_size,
        payload_chars: len,
        payload_bytes: payload.len(),
    })
}

impl ChunkSet {
    /// Number of chunks (always at least 1).
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Always false; an empty payload is rejected by [`split`].
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// All chunks in order.
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// Chunk at `index`, if in range.
    pub fn chunk(&self, index: usize) -> Option<&str> {
        self.chunks.get(index).map(String::as_str)
    }

    /// Payload checksum shared by every frame.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Balanced chunk length in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Payload length in characters.
    pub fn payload_chars(&self) -> usize {
        self.payload_chars
    }

    /// Payload length in UTF-8 bytes.
    pub fn payload_bytes(&self) -> usize {
        self.payload_bytes
    }

    /// Frame for `index`. Out-of-range indices clamp to the last chunk.
    pub fn frame(&self, index: usize) -> Frame<'_> {
        let index = index.min(self.len().saturating_sub(1));
        Frame {
            index,
            total: self.len(),
            checksum: &self.checksum,
            content: &self.chunks[index],
        }
    }

    /// Iterate over every frame in order.
    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> + '_ {
        (0..self.len()).map(move |i| self.frame(i))
    }
}
