//! Rendering components for the sender.
//!
//! This module contains the UI pieces drawn around the optical code:
//! progress label, scrub bar, status line, footer, and help overlay.

mod help;
mod progress;
mod status;
mod view;

pub use help::{centered_rect, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{
    build_scrub_bar_chars, column_to_scroll, format_progress_label, template_renderer,
};
pub use status::{
    build_footer_spans, build_status_text, format_delay, TransferSummary, FOOTER_KEYS,
};
pub use view::{draw, required_size, ViewModel, CHROME_ROWS};
