//! Payload checksum used as the transfer session identifier.

use md5::{Digest, Md5};

/// Length of a checksum string in characters.
pub const CHECKSUM_LEN: usize = 32;

/// Compute the uppercase hexadecimal MD5 digest of `payload`.
///
/// Receivers compare this value across frames to detect that the sender
/// switched to a different payload mid-stream, so it must stay byte-for-byte
/// compatible with existing receivers: MD5 over the UTF-8 bytes, uppercase.
pub fn checksum(payload: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(payload.as_bytes());
    hex_upper(&hasher.finalize())
}

fn hex_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}
