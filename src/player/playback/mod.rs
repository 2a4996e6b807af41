//! Playback timing primitives: scroll/index mapping and the speed schedule.

mod scroll;
mod speed;

pub use scroll::{index_from_scroll, scroll_extent, scroll_from_index};
pub use speed::{SpeedSchedule, DEFAULT_SPEEDS_MS, DEFAULT_SPEED_INDEX};
