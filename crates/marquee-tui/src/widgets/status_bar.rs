use std::time::Instant;

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let mode_str = if app.is_disabled() {
            "EMPTY"
        } else if app.pinned_pause {
            "PAUSED"
        } else if app.hovering {
            "HOVER"
        } else {
            "PLAYING"
        };

        let slide_str = match app.current() {
            Some(i) => format!("{}/{}", i + 1, app.deck.len()),
            None => "-/-".to_string(),
        };

        let mut status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            format!(" {} | Slide {}", mode_str, slide_str)
        };

        if app.config.ui.show_countdown && !app.is_paused() {
            if let Some(remaining) = app.auto.remaining(now) {
                status_text.push_str(&format!(" | next in {:.1}s", remaining.as_secs_f64()));
            }
        }

        if app.config.ui.show_clock {
            status_text.push_str(&format!(" | {}", Local::now().format("%H:%M:%S")));
        }

        let help_hint = " q:quit h/l:prev-next 1-9:jump space:pause o:open ";
        let padding_len = status_padding(area.width, &status_text, help_hint);

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg1),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg1),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.fg1).bg(app.theme.bg1),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}

/// Spacer between the status text and the right-aligned help hint,
/// measured in display columns rather than bytes so non-ASCII status
/// messages keep the hint flush with the right edge.
fn status_padding(area_width: u16, status: &str, hint: &str) -> usize {
    (area_width as usize).saturating_sub(status.width() + hint.width())
}
