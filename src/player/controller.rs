//! Playback controller: the state machine that decides which chunk is shown.
//!
//! The controller owns the [`ChunkSet`] and the [`PlaybackState`]. Timers are
//! modelled as deadlines inside [`PlaybackPhase`]; the caller's event loop
//! sleeps until [`PlaybackController::next_deadline`] and then calls
//! [`PlaybackController::poll`]. Every operation that can arm a timer takes
//! the current `Instant`, so the machine is fully deterministic under test.
//!
//! ```text
//!            reconfigure / cycle_speed (delay > 0)
//!   Idle ─────────────────────────────────────────▶ Playing ◀─┐ tick
//!    ▲                                               │   └────┘
//!    │ delay == 0             begin_interaction      ▼
//!    └──────────────── ResumePending ◀─────────── Paused
//!                        │   end_interaction
//!                        └─ resume timer fires ─▶ Playing / Idle
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::ConfigError;
use crate::player::playback::{index_from_scroll, scroll_extent, scroll_from_index};
use crate::player::state::{
    PlaybackEvent, PlaybackPhase, PlaybackSettings, PlaybackState, ProgressInfo, Release,
};
use crate::transfer::{split, ChunkSet, FramerError};

/// Stateful driver of chunk display, auto-advance, and scrubbing.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    chunks: ChunkSet,
    settings: PlaybackSettings,
    state: PlaybackState,
}

impl PlaybackController {
    /// Create a controller at index 0 and arm auto-advance per the current
    /// speed.
    ///
    /// # Errors
    /// [`ConfigError::InvalidScrollWidth`] if the scroll width is not a
    /// positive finite number.
    pub fn new(
        chunks: ChunkSet,
        settings: PlaybackSettings,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let mut controller = Self {
            chunks,
            settings,
            state: PlaybackState::new(),
        };
        controller.rearm(now);
        Ok(controller)
    }

    /// Replace the payload.
    ///
    /// On success every timer is cancelled, the position resets to index 0,
    /// and auto-advance is rearmed per the current speed. On error the
    /// previous payload and state are left untouched. Arguments are checked
    /// even after [`teardown`](Self::teardown), which otherwise makes this a
    /// no-op.
    pub fn reconfigure(
        &mut self,
        payload: &str,
        max_chunk_size: usize,
        now: Instant,
    ) -> Result<(), FramerError> {
        let chunks = split(payload, max_chunk_size)?;
        self.replace_chunks(chunks, now);
        Ok(())
    }

    /// Replace the chunk set with one computed elsewhere.
    pub fn replace_chunks(&mut self, chunks: ChunkSet, now: Instant) {
        if self.state.is_stopped() {
            return;
        }
        self.cancel_timers();
        self.chunks = chunks;
        self.state.reset_position();
        debug!(
            total = self.chunks.len(),
            checksum = self.chunks.checksum(),
            "payload replaced"
        );
        self.rearm(now);
    }

    /// Fire the pending timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<PlaybackEvent> {
        match self.state.phase {
            PlaybackPhase::Playing { next_tick } if next_tick <= now => Some(self.tick(now)),
            PlaybackPhase::ResumePending { resume_at } if resume_at <= now => {
                self.rearm(now);
                debug!(phase = self.state.phase.label(), "resumed after interaction");
                Some(PlaybackEvent::Resumed)
            }
            _ => None,
        }
    }

    /// Deadline of the pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.phase.deadline()
    }

    /// Time left until the pending timer fires, if any.
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Select the next speed and rearm auto-advance with it.
    pub fn cycle_speed(&mut self, now: Instant) -> Duration {
        if self.state.is_stopped() {
            return self.settings.speeds.current();
        }
        let delay = self.settings.speeds.cycle();
        debug!(delay_ms = delay.as_millis() as u64, "speed changed");
        self.rearm(now);
        self.state.needs_render = true;
        delay
    }

    /// User started touching the scroll surface: cancel every timer.
    pub fn begin_interaction(&mut self) {
        if self.state.is_stopped() {
            return;
        }
        self.cancel_timers();
        self.state.phase = PlaybackPhase::Paused;
        self.state.needs_render = true;
    }

    /// User interaction ended: arm the one-shot resume timer.
    pub fn end_interaction(&mut self, release: Release, now: Instant) {
        if self.state.is_stopped() {
            return;
        }
        self.cancel_timers();
        let resume_at = now + self.settings.grace(release);
        self.state.phase = PlaybackPhase::ResumePending { resume_at };
        self.state.needs_render = true;
        debug!(?release, "resume scheduled");
    }

    /// Apply a raw scroll position from the UI.
    ///
    /// Always records the position. Returns true when the derived index
    /// differs from the last observed one, in which case the displayed index
    /// changes too.
    pub fn scroll_to(&mut self, position: f64) -> bool {
        if self.state.is_stopped() {
            return false;
        }
        self.state.scroll_position = position;
        let index = self.index_at(position);
        if index == self.state.last_observed_index {
            return false;
        }
        self.state.last_observed_index = index;
        self.state.current_index = index;
        self.state.needs_render = true;
        true
    }

    /// Scrub by whole chunks, clamped to the valid range.
    pub fn step(&mut self, delta: isize) -> bool {
        let last = self.chunks.len().saturating_sub(1);
        let target = self
            .state
            .current_index
            .saturating_add_signed(delta)
            .min(last);
        self.jump_to(target)
    }

    /// Scrub to a specific chunk, clamped to the valid range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let index = index.min(self.chunks.len().saturating_sub(1));
        self.scroll_to(scroll_from_index(index, self.settings.index_scroll_width))
    }

    /// Cancel every timer and stop for good.
    pub fn teardown(&mut self) {
        if self.state.is_stopped() {
            return;
        }
        self.cancel_timers();
        self.state.phase = PlaybackPhase::Stopped;
        debug!("playback torn down");
    }

    /// Displayed chunk index.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Number of chunks.
    pub fn total(&self) -> usize {
        self.chunks.len()
    }

    /// Current timer phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase
    }

    /// Current inter-frame delay (zero when auto-advance is off).
    pub fn current_delay(&self) -> Duration {
        self.settings.speeds.current()
    }

    /// Raw scroll position.
    pub fn scroll_position(&self) -> f64 {
        self.state.scroll_position
    }

    /// Length of the scroll surface.
    pub fn scroll_extent(&self) -> f64 {
        scroll_extent(self.chunks.len(), self.settings.index_scroll_width)
    }

    /// Frame string for the displayed chunk.
    pub fn current_frame(&self) -> String {
        self.chunks.frame(self.state.current_index).to_string()
    }

    /// Index/total pair for progress labels.
    pub fn progress(&self) -> ProgressInfo {
        ProgressInfo {
            index: self.state.current_index,
            total: self.chunks.len(),
        }
    }

    /// Chunk set being transmitted.
    pub fn chunks(&self) -> &ChunkSet {
        &self.chunks
    }

    /// Controller settings.
    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Take and clear the redraw flag.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.state.needs_render)
    }

    fn index_at(&self, position: f64) -> usize {
        index_from_scroll(
            position,
            self.settings.index_scroll_width,
            self.chunks.len(),
        )
    }

    fn tick(&mut self, now: Instant) -> PlaybackEvent {
        let from = self.index_at(self.state.scroll_position);
        let to = (from + 1) % self.chunks.len().max(1);

        self.state.scroll_position = scroll_from_index(to, self.settings.index_scroll_width);
        self.state.current_index = to;
        self.state.last_observed_index = to;
        self.state.needs_render = true;
        self.rearm(now);

        PlaybackEvent::Advanced { from, to }
    }

    fn cancel_timers(&mut self) {
        if self.state.phase.deadline().is_some() {
            self.state.phase = PlaybackPhase::Idle;
        }
    }

    /// Cancel whatever is pending and arm auto-advance at the current speed.
    fn rearm(&mut self, now: Instant) {
        self.cancel_timers();
        self.state.phase = if self.settings.speeds.is_running() {
            PlaybackPhase::Playing {
                next_tick: now + self.settings.speeds.current(),
            }
        } else {
            PlaybackPhase::Idle
        };
    }
}
