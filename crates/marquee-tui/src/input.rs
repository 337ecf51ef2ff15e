use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::HitAreas;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSlide,
    PrevSlide,
    /// Jump straight to a dot index
    JumpTo(usize),
    /// Toggle the manual pause
    TogglePause,
    /// Open the active slide's link in the browser
    OpenLink,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    // Digits jump directly to a dot, the keyboard counterpart of a dot
    // click
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        return Action::JumpTo(c as usize - '1' as usize);
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Outcome of a mouse event against the rendered layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseOutcome {
    /// Pointer is inside / outside the carousel region
    Hover(bool),
    /// A control was clicked
    Click(Action),
    None,
}

/// Resolve a mouse event against the last rendered hit areas.
pub fn handle_mouse_event(mouse: MouseEvent, layout: &HitAreas) -> MouseOutcome {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            MouseOutcome::Hover(layout.region.contains(pos))
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.prev.contains(pos) {
                MouseOutcome::Click(Action::PrevSlide)
            } else if layout.next.contains(pos) {
                MouseOutcome::Click(Action::NextSlide)
            } else if let Some(i) = layout.dot_at(pos) {
                MouseOutcome::Click(Action::JumpTo(i))
            } else {
                MouseOutcome::None
            }
        }
        _ => MouseOutcome::None,
    }
}
