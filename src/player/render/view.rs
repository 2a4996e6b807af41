//! Full-screen layout of the sender.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │         optical code         │
//! │           2 / 7              │  progress label
//! │ ───┼────⏺───┼───────┼─────── │  scrub bar
//! │ ▶ playing  spd: 500ms ...    │  status
//! │  space: speed | ?: help ...  │  footer
//! └──────────────────────────────┘
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::help::render_help;
use super::progress::build_scrub_bar_chars;
use super::status::footer_line;
use crate::player::state::ScrubArea;
use crate::theme::Theme;

/// Rows below the code: label, scrub bar, status, footer.
pub const CHROME_ROWS: u16 = 4;

/// Everything needed to draw one screen.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    /// Rasterized optical code
    pub code_lines: &'a [String],
    /// Progress label text
    pub label: String,
    /// Current scroll position
    pub position: f64,
    /// Scroll surface length
    pub extent: f64,
    /// Number of chunks
    pub total: usize,
    /// Status line text
    pub status: String,
    /// Whether to draw the help overlay
    pub show_help: bool,
}

/// Terminal size needed to show `code_lines` in full.
pub fn required_size(code_lines: &[String]) -> (u16, u16) {
    let cols = code_lines
        .first()
        .map(|l| l.width())
        .unwrap_or(0);
    (cols as u16, code_lines.len() as u16 + CHROME_ROWS)
}

/// Draw the sender screen and return where the scrub bar landed.
pub fn draw(frame: &mut Frame, view: &ViewModel<'_>, theme: &Theme) -> Option<ScrubArea> {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_code(frame, chunks[0], view.code_lines, theme);

    let label = Paragraph::new(view.label.as_str())
        .style(theme.accent_bold_style())
        .alignment(Alignment::Center);
    frame.render_widget(label, chunks[1]);

    let scrub = draw_scrub_bar(frame, chunks[2], view, theme);

    let status = Paragraph::new(view.status.as_str()).style(theme.text_secondary_style());
    frame.render_widget(status, chunks[3]);

    let footer = Paragraph::new(footer_line(theme)).alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);

    if view.show_help {
        render_help(frame, area, theme);
    }

    scrub
}

fn draw_code(frame: &mut Frame, area: Rect, code_lines: &[String], theme: &Theme) {
    let (cols, rows) = required_size(code_lines);
    let code_rows = rows - CHROME_ROWS;

    if cols > area.width || code_rows > area.height {
        let message = format!(
            "Terminal too small for this code: need {}x{}, have {}x{}. \
             Enlarge the window or lower the chunk size.",
            cols,
            rows,
            area.width,
            area.height + CHROME_ROWS
        );
        let warning = Paragraph::new(message)
            .style(theme.error_style())
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(warning, area);
        return;
    }

    let top = area.y + (area.height - code_rows) / 2;
    let left = area.x + (area.width - cols) / 2;
    let target = Rect::new(left, top, cols, code_rows);

    let lines: Vec<Line> = code_lines
        .iter()
        .map(|l| Line::from(Span::raw(l.as_str())))
        .collect();
    frame.render_widget(Paragraph::new(lines).style(theme.code_style()), target);
}

fn draw_scrub_bar(
    frame: &mut Frame,
    area: Rect,
    view: &ViewModel<'_>,
    theme: &Theme,
) -> Option<ScrubArea> {
    if area.width < 3 || area.height == 0 {
        return None;
    }
    let scrub = ScrubArea {
        row: area.y,
        start: area.x + 1,
        width: area.width - 2,
    };
    let (bar, filled) = build_scrub_bar_chars(
        scrub.width as usize,
        view.position,
        view.extent,
        view.total,
    );

    let played: String = bar[..filled].iter().collect();
    let head: String = bar[filled..=filled.min(bar.len() - 1)].iter().collect();
    let rest: String = bar[(filled + 1).min(bar.len())..].iter().collect();

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(played, theme.accent_style()),
        Span::styled(head, theme.accent_bold_style()),
        Span::styled(rest, Style::default().fg(theme.text_secondary)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    Some(scrub)
}
