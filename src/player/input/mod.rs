//! Input handling for the sender.
//!
//! Translates crossterm events into controller transitions and returns
//! control flow signals for the main loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Instant;

use crossterm::event::Event;

use crate::player::controller::PlaybackController;
use crate::player::state::{InputResult, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    controller: &mut PlaybackController,
    view: &mut ViewState,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, controller, view, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, controller, view, now),
        Event::Resize(_, _) => {
            view.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
