//! Frontend-agnostic input events.
//!
//! The terminal frontend translates its native crossterm stream into this
//! enum so the app core only handles one event shape.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// Events emitted by the frontend, converted to a unified format.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Application quit signal
    Quit,
}

impl FrontendEvent {
    /// Create a key event
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    /// Create a mouse event
    pub fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self::Mouse { kind, x, y }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// Create a quit event
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Convert a raw crossterm event; None for events this app ignores.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => {
                // Only key presses; repeats and releases are dropped.
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                Some(Self::Key {
                    code: key.code,
                    modifiers: key.modifiers,
                })
            }
            Event::Mouse(mouse) => Some(Self::Mouse {
                kind: mouse.kind,
                x: mouse.column,
                y: mouse.row,
            }),
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    #[test]
    fn test_event_creation() {
        let key_event = FrontendEvent::key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(key_event, FrontendEvent::Key { .. }));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));

        let quit_event = FrontendEvent::quit();
        assert!(matches!(quit_event, FrontendEvent::Quit));
    }

    #[test]
    fn test_key_press_converts() {
        let raw = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(
            FrontendEvent::from_crossterm(raw),
            Some(FrontendEvent::key(KeyCode::Right, KeyModifiers::NONE))
        );
    }

    #[test]
    fn test_key_release_is_dropped() {
        let raw = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(FrontendEvent::from_crossterm(raw), None);
    }

    #[test]
    fn test_resize_converts() {
        let raw = Event::Resize(100, 30);
        assert_eq!(
            FrontendEvent::from_crossterm(raw),
            Some(FrontendEvent::resize(100, 30))
        );
    }
}
