//! Player state management
//!
//! Contains the `PlaybackState` struct that holds all playback state, and the
//! shared types used across player modules.

use std::time::{Duration, Instant};

use crate::config::ConfigError;
use crate::player::playback::SpeedSchedule;

/// Default scroll units per chunk band.
pub const DEFAULT_INDEX_SCROLL_WIDTH: f64 = 100.0;

/// Default grace period after a drag is released with no momentum.
pub const DEFAULT_DRAG_RELEASE_GRACE: Duration = Duration::from_millis(1500);

/// Default grace period after a momentum scroll settles.
pub const DEFAULT_MOMENTUM_RELEASE_GRACE: Duration = Duration::from_millis(500);

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the main
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the sender
    Quit,
}

/// Where the controller is in its timer lifecycle.
///
/// Each phase holds at most one deadline, so the auto-advance timer and the
/// delayed-resume timer can never both be armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No timer armed (speed is zero or nothing to play)
    Idle,
    /// Auto-advance timer armed
    Playing { next_tick: Instant },
    /// User is interacting; all timers cancelled
    Paused,
    /// Interaction ended; one-shot resume timer armed
    ResumePending { resume_at: Instant },
    /// Torn down; every operation is a no-op
    Stopped,
}

impl PlaybackPhase {
    /// Next deadline held by this phase, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match *self {
            Self::Playing { next_tick } => Some(next_tick),
            Self::ResumePending { resume_at } => Some(resume_at),
            Self::Idle | Self::Paused | Self::Stopped => None,
        }
    }

    /// Short label for status display and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing { .. } => "playing",
            Self::Paused => "paused",
            Self::ResumePending { .. } => "resuming",
            Self::Stopped => "stopped",
        }
    }
}

/// How a user interaction ended. Selects the resume grace period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Finger/button lifted with no momentum
    Drag,
    /// Momentum scroll came to rest
    Momentum,
}

/// Event emitted when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Auto-advance moved the display from one chunk to the next
    Advanced { from: usize, to: usize },
    /// The delayed-resume timer fired and auto-advance was rearmed
    Resumed,
}

/// Index and total passed to progress label renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInfo {
    /// 0-based current chunk index
    pub index: usize,
    /// Total number of chunks
    pub total: usize,
}

/// Caller-supplied progress label renderer.
pub type ProgressRenderer = Box<dyn Fn(ProgressInfo) -> String>;

/// Default progress label: `"{index + 1}/{total}"`.
pub fn default_progress_label(info: ProgressInfo) -> String {
    format!("{}/{}", info.index + 1, info.total)
}

/// Screen region of the scrub bar, recorded at draw time for mouse mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrubArea {
    /// Terminal row of the bar (0-indexed)
    pub row: u16,
    /// First column of the bar
    pub start: u16,
    /// Width of the bar in columns
    pub width: u16,
}

impl ScrubArea {
    /// Whether a cell lies on the bar.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.row && column >= self.start && column < self.start.saturating_add(self.width)
    }
}

/// UI-only state of the terminal sender.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Whether a mouse drag is in progress
    pub dragging: bool,
    /// Where the scrub bar was last drawn
    pub scrub: Option<ScrubArea>,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}

/// Tunables for the playback controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSettings {
    /// Cyclic inter-frame delays
    pub speeds: SpeedSchedule,
    /// Scroll units per chunk band
    pub index_scroll_width: f64,
    /// Resume delay after [`Release::Drag`]
    pub drag_release_grace: Duration,
    /// Resume delay after [`Release::Momentum`]
    pub momentum_release_grace: Duration,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            speeds: SpeedSchedule::default(),
            index_scroll_width: DEFAULT_INDEX_SCROLL_WIDTH,
            drag_release_grace: DEFAULT_DRAG_RELEASE_GRACE,
            momentum_release_grace: DEFAULT_MOMENTUM_RELEASE_GRACE,
        }
    }
}

impl PlaybackSettings {
    /// Reject settings that would make the scroll mapping degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.index_scroll_width.is_finite() && self.index_scroll_width > 0.0) {
            return Err(ConfigError::InvalidScrollWidth(self.index_scroll_width));
        }
        Ok(())
    }

    /// Grace period for the given release kind.
    pub fn grace(&self, release: Release) -> Duration {
        match release {
            Release::Drag => self.drag_release_grace,
            Release::Momentum => self.momentum_release_grace,
        }
    }
}

/// Central playback state.
///
/// The single source of truth for what is displayed and which timer, if any,
/// is pending. Owned by `PlaybackController`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Displayed chunk index
    pub current_index: usize,
    /// Raw scroll position from the UI or from programmatic advance
    pub scroll_position: f64,
    /// Index last derived from a scroll update
    pub last_observed_index: usize,
    /// Timer lifecycle
    pub phase: PlaybackPhase,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlaybackState {
    /// Fresh state at index 0 with no timers.
    pub fn new() -> Self {
        Self {
            current_index: 0,
            scroll_position: 0.0,
            last_observed_index: 0,
            phase: PlaybackPhase::Idle,
            needs_render: true,
        }
    }

    /// Reset position to the first chunk, keeping the phase untouched.
    pub fn reset_position(&mut self) {
        self.current_index = 0;
        self.scroll_position = 0.0;
        self.last_observed_index = 0;
        self.needs_render = true;
    }

    /// Whether `teardown` has run.
    pub fn is_stopped(&self) -> bool {
        self.phase == PlaybackPhase::Stopped
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
