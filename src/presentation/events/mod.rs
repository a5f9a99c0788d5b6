//! Event handling.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed and the view changed.
    Consumed,
}

/// Terminal event classification.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a hard quit that works from every state.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if the key went down; repeats and releases are ignored.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Cell under a left-button press, if this is one.
    #[must_use]
    pub fn left_click(mouse: &MouseEvent) -> Option<Position> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(Position::new(mouse.column, mouse.row))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, kind)
    }

    fn make_mouse_event(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_force_quit() {
        assert!(EventHandler::is_force_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press
        )));
        assert!(!EventHandler::is_force_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
    }

    #[test]
    fn test_only_presses_count() {
        assert!(EventHandler::is_press(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
        assert!(!EventHandler::is_press(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release
        )));
        assert!(!EventHandler::is_press(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Repeat
        )));
    }

    #[test]
    fn test_left_click() {
        assert_eq!(
            EventHandler::left_click(&make_mouse_event(MouseEventKind::Down(MouseButton::Left))),
            Some(Position::new(7, 3))
        );
        assert_eq!(
            EventHandler::left_click(&make_mouse_event(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(
            EventHandler::left_click(&make_mouse_event(MouseEventKind::Up(MouseButton::Left))),
            None
        );
    }
}
