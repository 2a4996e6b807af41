//! Keyboard input handling for the sender.
//!
//! Keyboard scrubbing behaves like a momentum scroll: it pauses
//! auto-advance, moves, and schedules the short resume.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::controller::PlaybackController;
use crate::player::state::{InputResult, Release, ViewState};

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    controller: &mut PlaybackController,
    view: &mut ViewState,
    now: Instant,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if view.show_help {
        view.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => {
            view.toggle_help();
            InputResult::Continue
        }

        // === Speed ===
        KeyCode::Char(' ') | KeyCode::Char('s') => {
            controller.cycle_speed(now);
            InputResult::Continue
        }

        // === Scrubbing ===
        KeyCode::Left | KeyCode::Char('h') => {
            scrub(controller, now, |c| c.step(-1));
            InputResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            scrub(controller, now, |c| c.step(1));
            InputResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            scrub(controller, now, |c| c.jump_to(0));
            InputResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            scrub(controller, now, |c| c.jump_to(usize::MAX));
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Run a discrete scrub as a complete interaction.
pub(crate) fn scrub(
    controller: &mut PlaybackController,
    now: Instant,
    action: impl FnOnce(&mut PlaybackController) -> bool,
) {
    controller.begin_interaction();
    action(controller);
    controller.end_interaction(Release::Momentum, now);
}
