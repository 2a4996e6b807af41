//! Terminal sender: the event loop that drives a `PlaybackController`.
//!
//! The loop sleeps in `crossterm::event::poll` until either input arrives or
//! the controller's next deadline passes, so timers fire on time without
//! busy-waiting.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, trace};

use crate::code::{CodeRenderer, ErrorCorrection, RenderError};
use crate::player::controller::PlaybackController;
use crate::player::input::handle_event;
use crate::player::render::{build_status_text, draw, TransferSummary, ViewModel};
use crate::player::state::{
    default_progress_label, InputResult, PlaybackEvent, ProgressRenderer, ViewState,
};
use crate::theme::current_theme;
use crate::transfer::ChunkSet;

/// Longest the loop sleeps when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Rendering options for the sender.
pub struct SendOptions {
    /// Error correction level passed to the renderer
    pub level: ErrorCorrection,
    /// Terminal columns per module
    pub scale: usize,
    /// Progress label renderer
    pub progress_label: ProgressRenderer,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            level: ErrorCorrection::default(),
            scale: 1,
            progress_label: Box::new(default_progress_label),
        }
    }
}

/// How a sending session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOutcome {
    /// Number of chunks in the transfer
    pub total: usize,
    /// Number of auto-advance ticks that fired
    pub ticks: u64,
}

/// Render every frame once, failing on the first that does not fit.
///
/// Run before opening the terminal UI so a misconfigured chunk size is
/// reported up front rather than mid-transfer.
pub fn validate_frames(
    chunks: &ChunkSet,
    renderer: &dyn CodeRenderer,
    level: ErrorCorrection,
) -> Result<(), RenderError> {
    for frame in chunks.frames() {
        renderer.render(&frame.to_string(), level)?;
    }
    debug!(total = chunks.len(), %level, "all frames render");
    Ok(())
}

/// Restores the terminal on drop, including on early return and panic unwind.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Caches the rasterized code for one chunk index.
struct CodeCache {
    index: Option<usize>,
    lines: Vec<String>,
}

impl CodeCache {
    fn lines_for(
        &mut self,
        controller: &PlaybackController,
        renderer: &dyn CodeRenderer,
        options: &SendOptions,
    ) -> Result<&[String], RenderError> {
        let index = controller.current_index();
        if self.index != Some(index) {
            let image = renderer.render(&controller.current_frame(), options.level)?;
            self.lines = image.to_half_block_lines(options.scale);
            self.index = Some(index);
        }
        Ok(&self.lines)
    }
}

/// Run the interactive sender until the user quits.
///
/// The controller is torn down before returning.
pub fn run_sender(
    controller: &mut PlaybackController,
    renderer: &dyn CodeRenderer,
    options: &SendOptions,
) -> Result<SendOutcome> {
    let mut guard = TerminalGuard::enter()?;
    let result = event_loop(&mut guard.terminal, controller, renderer, options);
    controller.teardown();
    drop(guard);

    let outcome = result?;
    info!(total = outcome.total, ticks = outcome.ticks, "sender stopped");
    Ok(outcome)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut PlaybackController,
    renderer: &dyn CodeRenderer,
    options: &SendOptions,
) -> Result<SendOutcome> {
    let theme = current_theme();
    let summary = TransferSummary {
        chunk_size: controller.chunks().chunk_size(),
        payload_bytes: controller.chunks().payload_bytes(),
        level: options.level,
        checksum: controller.chunks().checksum().to_string(),
    };
    let mut view = ViewState {
        needs_render: true,
        ..ViewState::default()
    };
    let mut cache = CodeCache {
        index: None,
        lines: Vec::new(),
    };
    let mut ticks = 0u64;

    loop {
        if let Some(event) = controller.poll(Instant::now()) {
            trace!(?event, "timer fired");
            if matches!(event, PlaybackEvent::Advanced { .. }) {
                ticks += 1;
            }
        }

        let controller_dirty = controller.take_needs_render();
        let view_dirty = std::mem::take(&mut view.needs_render);
        if controller_dirty || view_dirty {
            let lines = cache.lines_for(controller, renderer, options)?;
            let model = ViewModel {
                code_lines: lines,
                label: (options.progress_label)(controller.progress()),
                position: controller.scroll_position(),
                extent: controller.scroll_extent(),
                total: controller.total(),
                status: build_status_text(
                    controller.phase(),
                    &controller.settings().speeds,
                    &summary,
                ),
                show_help: view.show_help,
            };
            let mut scrub = None;
            terminal.draw(|f| scrub = draw(f, &model, &theme))?;
            view.scrub = scrub;
        }

        let timeout = controller
            .time_until_deadline(Instant::now())
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

        if event::poll(timeout)? {
            let input = event::read()?;
            if handle_event(input, controller, &mut view, Instant::now()) == InputResult::Quit {
                break;
            }
        }
    }

    Ok(SendOutcome {
        total: controller.total(),
        ticks,
    })
}
