//! Frame string encoding and parsing.
//!
//! The frame string is the only interchange format between sender and
//! receiver. Chunk content is carried verbatim after the first `/`, so it may
//! itself contain `:` and `/`; a parser must only split on the first slash and
//! on the first two colons of the header.

use std::fmt;

use super::error::FrameError;

/// A borrowed view of one frame, built on demand from a `ChunkSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// 0-based chunk index
    pub index: usize,
    /// Total number of chunks in the transfer
    pub total: usize,
    /// Payload checksum
    pub checksum: &'a str,
    /// Raw chunk content
    pub content: &'a str,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}/{}",
            self.index, self.total, self.checksum, self.content
        )
    }
}

/// Encode a frame string: `<index>:<total>:<checksum>/<content>`.
pub fn encode(index: usize, total: usize, checksum: &str, content: &str) -> String {
    Frame {
        index,
        total,
        checksum,
        content,
    }
    .to_string()
}

/// An owned frame recovered from a frame string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    pub index: usize,
    pub total: usize,
    pub checksum: String,
    pub content: String,
}

impl ParsedFrame {
    /// Parse a frame string produced by [`encode`].
    pub fn parse(input: &str) -> Result<Self, FrameError> {
        let (header, content) = input
            .split_once('/')
            .ok_or(FrameError::MissingContentSeparator)?;

        let mut parts = header.splitn(3, ':');
        let (Some(index), Some(total), Some(checksum)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(FrameError::MalformedHeader {
                header: header.to_string(),
            });
        };

        let index = parse_decimal("index", index)?;
        let total = parse_decimal("total", total)?;
        if index >= total {
            return Err(FrameError::IndexOutOfRange { index, total });
        }

        Ok(Self {
            index,
            total,
            checksum: checksum.to_string(),
            content: content.to_string(),
        })
    }

    /// Borrow this frame as a [`Frame`].
    pub fn as_frame(&self) -> Frame<'_> {
        Frame {
            index: self.index,
            total: self.total,
            checksum: &self.checksum,
            content: &self.content,
        }
    }
}

fn parse_decimal(field: &'static str, value: &str) -> Result<usize, FrameError> {
    // usize::from_str accepts a leading '+', the wire format does not
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FrameError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| FrameError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
