//! Pagination dots
//!
//! One dot per slide, positional: the dots are derived from the same
//! deck the carousel was built from, so indicator count always matches
//! slide count. Exactly one dot carries the active style. Each dot's
//! rect is recorded for click-to-jump resolution.

use ratatui::{layout::Rect, style::Style, Frame};

use crate::app::App;

pub struct DotsWidget;

impl DotsWidget {
    pub fn render(frame: &mut Frame, region: Rect, app: &mut App) {
        app.layout.dots.clear();

        let Some(ref carousel) = app.carousel else {
            return;
        };
        let total = carousel.total();
        let current = carousel.current();

        // One row above the bottom border; dots one cell wide with one
        // cell gaps. If the strip doesn't fit, the affordance degrades
        // silently.
        let strip_width = (total * 2).saturating_sub(1) as u16;
        if region.height < 4 || region.width < strip_width + 2 {
            return;
        }
        let y = region.y + region.height - 2;
        let x0 = region.x + (region.width - strip_width) / 2;

        let states = dot_states(total, current);
        for (i, active) in states.iter().enumerate() {
            let x = x0 + (i * 2) as u16;
            let style = if *active {
                Style::default().fg(app.theme.accent)
            } else {
                Style::default().fg(app.theme.dot_inactive)
            };
            let symbol = if *active { "●" } else { "○" };
            frame.buffer_mut().set_string(x, y, symbol, style);
            app.layout.dots.push(Rect::new(x, y, 1, 1));
        }
    }
}

/// Active flags for the dot row: exactly one dot (the one at the
/// current index) is active.
pub fn dot_states(total: usize, current: usize) -> Vec<bool> {
    (0..total).map(|i| i == current).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_dot() {
        for total in 1..6 {
            for current in 0..total {
                let states = dot_states(total, current);
                assert_eq!(states.len(), total);
                assert_eq!(states.iter().filter(|a| **a).count(), 1);
                assert!(states[current]);
            }
        }
    }
}
