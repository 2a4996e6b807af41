//! qrcast - one-way data transfer over a looping sequence of QR codes
//!
//! A payload is split into balanced chunks, each wrapped in a
//! `<index>:<total>:<checksum>/<content>` frame, and the frames are shown as
//! QR codes in the terminal until a camera on the receiving side has
//! captured them all.
//!
//! - [`transfer`]: chunking, checksums, frame encoding and parsing
//! - [`code`]: rendering a frame string as an optical code
//! - [`player`]: the playback controller and terminal sender
//! - [`config`]: TOML configuration
//! - [`cli`]: command-line definitions (shared with `xtask`)

pub mod cli;
pub mod code;
pub mod config;
pub mod player;
pub mod theme;
pub mod transfer;

pub use config::Config;
pub use player::PlaybackController;
pub use transfer::{split, ChunkSet};
