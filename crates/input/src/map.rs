//! Key mapping from terminal events to scroll directions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key that scrolls the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    Left,
    Right,
    Up,
    Down,
}

impl ScrollKey {
    /// Which axis this key drives and its sign: `(is_vertical, -1 | 1)`.
    pub fn axis(&self) -> (bool, i32) {
        match self {
            ScrollKey::Left => (false, -1),
            ScrollKey::Right => (false, 1),
            ScrollKey::Up => (true, -1),
            ScrollKey::Down => (true, 1),
        }
    }
}

/// Map a key code to a scroll direction (WASD, arrows, or vim hjkl).
pub fn scroll_key(code: KeyCode) -> Option<ScrollKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(ScrollKey::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(ScrollKey::Right)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(ScrollKey::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(ScrollKey::Down)
        }
        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
