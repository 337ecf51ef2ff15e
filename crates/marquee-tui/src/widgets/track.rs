//! Track widget
//!
//! Renders the horizontal strip of slides translated by
//! `-(position * width)`. At rest the position equals the current index
//! and exactly one slide fills the viewport; mid-animation the outgoing
//! and incoming slides are clipped at the edges.

use marquee_core::Slide;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::theme::parse_color;

pub struct TrackWidget;

impl TrackWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, position: f64) {
        let block = Block::default()
            .title(format!(" {} ", app.deck.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.grey))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if app.is_disabled() {
            let notice = Paragraph::new(Line::from("No slides in deck"))
                .style(Style::default().fg(app.theme.fg1))
                .centered();
            frame.render_widget(notice, inner);
            return;
        }

        // Bottom two inner rows belong to the dot strip
        let track = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        if track.width == 0 || track.height == 0 {
            return;
        }
        Self::render_strip(frame.buffer_mut(), track, app, position);
    }

    fn render_strip(buf: &mut Buffer, area: Rect, app: &App, position: f64) {
        let total = app.deck.len() as f64;
        let width = area.width as f64;

        for (j, slide) in app.deck.slides.iter().enumerate() {
            let rel = j as f64 - position;
            // A slide can only be visible at one of these offsets; the
            // wrapped candidates cover animation across the seam.
            for candidate in [rel, rel - total, rel + total] {
                if candidate > -1.0 && candidate < 1.0 {
                    let offset = (candidate * width).round() as i32;
                    Self::render_slide(buf, area, app, slide, offset);
                }
            }
        }
    }

    /// Draw one slide at a horizontal `offset` (in cells, possibly
    /// negative), clipped to the track area.
    fn render_slide(buf: &mut Buffer, area: Rect, app: &App, slide: &Slide, offset: i32) {
        let accent = slide
            .accent
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(app.theme.accent);

        let title_style = Style::default()
            .fg(accent)
            .add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(app.theme.fg0);

        let mut lines: Vec<(&str, Style)> = vec![(slide.title.as_str(), title_style)];
        if !slide.body.is_empty() {
            lines.push(("", body_style));
            for line in &slide.body {
                lines.push((line.as_str(), body_style));
            }
        }

        let height = area.height as usize;
        let top = area.y + (height.saturating_sub(lines.len()) / 2) as u16;
        let width = area.width as usize;

        for (row, (text, style)) in lines.iter().enumerate() {
            let y = top + row as u16;
            if y >= area.y + area.height {
                break;
            }
            let padded = pad_center(text, width);
            let (dest_x, visible) = if offset >= 0 {
                let skip = 0;
                let take = width.saturating_sub(offset as usize);
                (area.x + offset as u16, clip_columns(&padded, skip, take))
            } else {
                let skip = (-offset) as usize;
                let take = width.saturating_sub(skip);
                (area.x, clip_columns(&padded, skip, take))
            };
            buf.set_string(dest_x, y, &visible, *style);
        }
    }
}

/// Center `text` in a field of `width` display columns, truncating when
/// it doesn't fit.
fn pad_center(text: &str, width: usize) -> String {
    let text = clip_columns(text, 0, width);
    let text_width: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Take `take` display columns of `s` starting at column `skip`. A
/// double-width character straddling either boundary becomes a space.
fn clip_columns(s: &str, skip: usize, take: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    let end = skip + take;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        let next = col + w;
        if next <= skip {
            col = next;
            continue;
        }
        if col >= end {
            break;
        }
        if col < skip || next > end {
            // Partially visible wide character
            for _ in col.max(skip)..next.min(end) {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
        col = next;
    }
    out
}
