//! Previous/next controls
//!
//! Chevrons at the track edges, vertically centered. Their rects are
//! recorded for click resolution; when the terminal is too small they
//! are skipped and the rects stay empty.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use crate::app::App;

pub struct ControlsWidget;

impl ControlsWidget {
    pub fn render(frame: &mut Frame, region: Rect, app: &mut App) {
        app.layout.prev = Rect::default();
        app.layout.next = Rect::default();

        if app.is_disabled() || region.width < 9 || region.height < 3 {
            return;
        }

        let style = Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD);
        let y = region.y + region.height / 2;

        let prev = Rect::new(region.x + 1, y, 3, 1);
        frame.buffer_mut().set_string(prev.x, prev.y, " ‹ ", style);
        app.layout.prev = prev;

        let next = Rect::new(region.x + region.width - 4, y, 3, 1);
        frame.buffer_mut().set_string(next.x, next.y, " › ", style);
        app.layout.next = next;
    }
}
