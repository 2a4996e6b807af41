//! Progress label and scrub bar for the sender.
//!
//! The scrub bar is the drag surface: its width maps linearly onto the
//! controller's scroll extent.

use crate::player::state::{ProgressInfo, ProgressRenderer, ScrubArea};

/// Expand a progress label template.
///
/// Placeholders: `{index}` (1-based), `{index0}` (0-based), `{total}`,
/// `{checksum}`. Unknown text is kept verbatim.
pub fn format_progress_label(template: &str, info: ProgressInfo, checksum: &str) -> String {
    template
        .replace("{index0}", &info.index.to_string())
        .replace("{index}", &(info.index + 1).to_string())
        .replace("{total}", &info.total.to_string())
        .replace("{checksum}", checksum)
}

/// Build a [`ProgressRenderer`] from a template string.
pub fn template_renderer(template: String, checksum: String) -> ProgressRenderer {
    Box::new(move |info| format_progress_label(&template, info, &checksum))
}

/// Build the scrub bar character array.
///
/// Chunk starts are marked with `┼` when they fit, the playhead with `⏺`.
///
/// # Returns
/// A tuple of (bar_chars, filled_count).
pub fn build_scrub_bar_chars(
    bar_width: usize,
    position: f64,
    extent: f64,
    total: usize,
) -> (Vec<char>, usize) {
    let progress = if extent > 0.0 {
        (position / extent).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((bar_width as f64 * progress) as usize).min(bar_width.saturating_sub(1));

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if total > 1 && total <= bar_width / 2 {
        for i in 1..total {
            let pos = (i * bar_width) / total;
            if pos < bar_width {
                bar[pos] = '┼';
            }
        }
    }

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Map a mouse column on the scrub bar to a scroll position.
///
/// Columns left of the bar map to its first cell, columns right of it clamp
/// to `extent`.
pub fn column_to_scroll(column: u16, area: ScrubArea, extent: f64) -> f64 {
    if area.width == 0 {
        return 0.0;
    }
    let offset = f64::from(column.saturating_sub(area.start)) + 0.5;
    (offset / f64::from(area.width) * extent).clamp(0.0, extent)
}
