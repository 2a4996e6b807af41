//! Sender playback: the controller state machine and its terminal shell.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `controller`: `PlaybackController`, the single owner of index, scroll
//!   position and timers
//! - `state`: phase, settings and shared types (InputResult, ScrubArea)
//! - `playback/`: scroll/index mapping and the speed schedule
//! - `input/`: keyboard and mouse handling
//! - `render/`: progress label, scrub bar, status line, help overlay
//! - `native`: the crossterm event loop that ties them together
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Instant;
//! use qrcast::code::QrRenderer;
//! use qrcast::player::{run_sender, PlaybackController, PlaybackSettings, SendOptions};
//! use qrcast::transfer::split;
//!
//! let chunks = split("hello world", 4).unwrap();
//! let mut controller =
//!     PlaybackController::new(chunks, PlaybackSettings::default(), Instant::now()).unwrap();
//! let outcome = run_sender(&mut controller, &QrRenderer, &SendOptions::default()).unwrap();
//! println!("showed {} chunks", outcome.total);
//! ```

pub mod controller;
pub(crate) mod input;
mod native;
pub mod playback;
pub mod render;
pub mod state;

pub use controller::PlaybackController;
pub use native::{run_sender, validate_frames, SendOptions, SendOutcome};
pub use state::{
    InputResult, PlaybackEvent, PlaybackPhase, PlaybackSettings, PlaybackState, ProgressInfo,
    ProgressRenderer, Release,
};
