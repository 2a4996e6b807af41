//! Help overlay for the sender.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space / s      Cycle speed (includes off)",
    "",
    "  Scrubbing (auto-advance resumes shortly after)",
    "    ←/→  h/l       Previous / next chunk",
    "    Wheel          Previous / next chunk",
    "    Home / End     First / last chunk",
    "    Drag on bar    Seek to any chunk",
    "",
    "  General",
    "    ?              Show this help",
    "    q / Esc        Quit",
    "",
    "  Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 52;

/// Create a centered rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

/// Render the help overlay centered over `area`.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = HELP_LINES.len() as u16 + 2;
    let popup = centered_rect(HELP_BOX_WIDTH, height, area);

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let help = Paragraph::new(lines).style(theme.text_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" qrcast help ")
            .border_style(theme.accent_style()),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}
