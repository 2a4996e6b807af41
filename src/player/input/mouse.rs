//! Mouse input handling for the sender.
//!
//! Press anywhere pauses auto-advance. Pressing or dragging on the scrub bar
//! seeks. Releasing schedules the long resume; wheel steps schedule the short
//! one.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::keyboard::scrub;
use crate::player::controller::PlaybackController;
use crate::player::render::column_to_scroll;
use crate::player::state::{InputResult, Release, ViewState};

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    controller: &mut PlaybackController,
    view: &mut ViewState,
    now: Instant,
) -> InputResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            controller.begin_interaction();
            view.dragging = true;
            if let Some(area) = view.scrub.filter(|a| a.contains(mouse.column, mouse.row)) {
                controller.scroll_to(column_to_scroll(
                    mouse.column,
                    area,
                    controller.scroll_extent(),
                ));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if view.dragging => {
            if let Some(area) = view.scrub {
                controller.scroll_to(column_to_scroll(
                    mouse.column,
                    area,
                    controller.scroll_extent(),
                ));
            }
        }
        MouseEventKind::Up(MouseButton::Left) if view.dragging => {
            view.dragging = false;
            controller.end_interaction(Release::Drag, now);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            scrub(controller, now, |c| c.step(1));
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            scrub(controller, now, |c| c.step(-1));
        }
        _ => {}
    }

    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::state::{PlaybackPhase, PlaybackSettings, ScrubArea};
    use crate::transfer::split;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn setup(now: Instant) -> (PlaybackController, ViewState) {
        // 4 chunks, extent 400
        let chunks = split("abcdefgh", 2).unwrap();
        let view = ViewState {
            scrub: Some(ScrubArea {
                row: 20,
                start: 1,
                width: 40,
            }),
            ..ViewState::default()
        };
        (
            PlaybackController::new(chunks, PlaybackSettings::default(), now).unwrap(),
            view,
        )
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_off_bar_pauses_without_seeking() {
        let now = Instant::now();
        let (mut c, mut v) = setup(now);
        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 5),
            &mut c,
            &mut v,
            now,
        );
        assert_eq!(c.phase(), PlaybackPhase::Paused);
        assert_eq!(c.current_index(), 0);
        assert!(v.dragging);
    }

    #[test]
    fn drag_along_bar_scrubs_then_release_resumes_late() {
        let now = Instant::now();
        let (mut c, mut v) = setup(now);

        handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 1, 20),
            &mut c,
            &mut v,
            now,
        );
        assert_eq!(c.current_index(), 0);

        // column 25 -> offset 24.5 / 40 * 400 = 245 -> band 2
        handle_mouse_event(
            mouse(MouseEventKind::Drag(MouseButton::Left), 25, 20),
            &mut c,
            &mut v,
            now,
        );
        assert_eq!(c.current_index(), 2);

        // Dragging past the end clamps to the last chunk, even off the bar row
        handle_mouse_event(
            mouse(MouseEventKind::Drag(MouseButton::Left), 70, 3),
            &mut c,
            &mut v,
            now,
        );
        assert_eq!(c.current_index(), 3);

        handle_mouse_event(
            mouse(MouseEventKind::Up(MouseButton::Left), 70, 3),
            &mut c,
            &mut v,
            now,
        );
        assert!(!v.dragging);
        assert_eq!(
            c.phase(),
            PlaybackPhase::ResumePending {
                resume_at: now + Duration::from_millis(1500)
            }
        );
    }

    #[test]
    fn wheel_steps_with_short_resume() {
        let now = Instant::now();
        let (mut c, mut v) = setup(now);
        handle_mouse_event(mouse(MouseEventKind::ScrollDown, 0, 0), &mut c, &mut v, now);
        assert_eq!(c.current_index(), 1);
        assert_eq!(
            c.next_deadline(),
            Some(now + Duration::from_millis(500))
        );
    }

    #[test]
    fn stray_release_is_ignored() {
        let now = Instant::now();
        let (mut c, mut v) = setup(now);
        let before = c.phase();
        handle_mouse_event(
            mouse(MouseEventKind::Up(MouseButton::Left), 0, 0),
            &mut c,
            &mut v,
            now,
        );
        assert_eq!(c.phase(), before);
    }
}
