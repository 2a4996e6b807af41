//! Status line and footer for the sender.
//!
//! Displays playback phase, speed, and transfer details, plus keybinding
//! hints.

use humansize::{format_size, DECIMAL};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::code::ErrorCorrection;
use crate::player::playback::SpeedSchedule;
use crate::player::state::PlaybackPhase;
use crate::theme::Theme;

/// Footer keybinding hints.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "speed"),
    ("←/→", "scrub"),
    ("drag", "seek"),
    ("?", "help"),
    ("q", "quit"),
];

/// Format the current speed for display.
pub fn format_delay(speeds: &SpeedSchedule) -> String {
    match speeds.frames_per_second() {
        Some(fps) => format!("{}ms ({:.1} fps)", speeds.current().as_millis(), fps),
        None => "off".to_string(),
    }
}

/// Transfer facts shown on the status line.
#[derive(Debug, Clone)]
pub struct TransferSummary {
    pub chunk_size: usize,
    pub payload_bytes: usize,
    pub level: ErrorCorrection,
    pub checksum: String,
}

/// Build the status line text.
pub fn build_status_text(
    phase: PlaybackPhase,
    speeds: &SpeedSchedule,
    summary: &TransferSummary,
) -> String {
    let icon = match phase {
        PlaybackPhase::Playing { .. } => "▶",
        PlaybackPhase::ResumePending { .. } => "◷",
        _ => "⏸",
    };
    format!(
        " {} {:<8} spd: {}  │  {} in {}-char chunks  │  ecl {}  │  {}",
        icon,
        phase.label(),
        format_delay(speeds),
        format_size(summary.payload_bytes as u64, DECIMAL),
        summary.chunk_size,
        summary.level,
        summary.checksum
    )
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}

/// Footer line from [`FOOTER_KEYS`].
pub fn footer_line(theme: &Theme) -> Line<'static> {
    Line::from(build_footer_spans(FOOTER_KEYS, theme))
}
