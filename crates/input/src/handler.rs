//! Held-key tracking for scroll input.
//!
//! Turns key press/release events into the per-frame [`ScrollIntent`] the
//! viewport consumes. Supports terminals that do not emit key release events
//! by expiring a held key after a timeout without press/repeat events.

use crossterm::event::KeyCode;

use crate::map::scroll_key;
use crate::types::{ScrollIntent, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, Default)]
struct HeldAxis {
    /// -1, 0 or +1.
    dir: i32,
    /// Time since the last press/repeat of `dir`.
    idle_ms: u32,
}

impl HeldAxis {
    fn press(&mut self, dir: i32) {
        self.dir = dir;
        self.idle_ms = 0;
    }

    fn release(&mut self, dir: i32) {
        if self.dir == dir {
            *self = Self::default();
        }
    }
}

/// Tracks which scroll directions are currently held.
#[derive(Debug, Clone)]
pub struct ScrollInput {
    horizontal: HeldAxis,
    vertical: HeldAxis,
    key_release_timeout_ms: Option<u32>,
}

impl Default for ScrollInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollInput {
    pub fn new() -> Self {
        Self {
            horizontal: HeldAxis::default(),
            vertical: HeldAxis::default(),
            key_release_timeout_ms: Some(KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    /// Rely on real release events only (terminal reports them).
    pub fn without_release_timeout(mut self) -> Self {
        self.key_release_timeout_ms = None;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    /// Handle a press or auto-repeat. Returns whether the key scrolls.
    ///
    /// Pressing the opposite direction on an axis replaces the held one.
    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        let Some(key) = scroll_key(code) else {
            return false;
        };
        let (vertical, dir) = key.axis();
        self.axis_mut(vertical).press(dir);
        true
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(key) = scroll_key(code) {
            let (vertical, dir) = key.axis();
            self.axis_mut(vertical).release(dir);
        }
    }

    /// Advance the release timeout by one frame.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let Some(timeout) = self.key_release_timeout_ms else {
            return;
        };
        for axis in [&mut self.horizontal, &mut self.vertical] {
            if axis.dir == 0 {
                continue;
            }
            axis.idle_ms = axis.idle_ms.saturating_add(elapsed_ms);
            if axis.idle_ms >= timeout {
                *axis = HeldAxis::default();
            }
        }
    }

    /// The intent for the current frame.
    pub fn intent(&self) -> ScrollIntent {
        ScrollIntent::new(self.horizontal.dir, self.vertical.dir)
    }

    pub fn clear(&mut self) {
        self.horizontal = HeldAxis::default();
        self.vertical = HeldAxis::default();
    }

    fn axis_mut(&mut self, vertical: bool) -> &mut HeldAxis {
        if vertical {
            &mut self.vertical
        } else {
            &mut self.horizontal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_intent_release_clears_it() {
        let mut input = ScrollInput::new();
        assert!(input.handle_key_press(KeyCode::Char('d')));
        assert!(input.handle_key_press(KeyCode::Up));
        assert_eq!(input.intent(), ScrollIntent::new(1, -1));

        input.handle_key_release(KeyCode::Char('d'));
        assert_eq!(input.intent(), ScrollIntent::new(0, -1));
    }

    #[test]
    fn releasing_the_other_direction_keeps_the_held_one() {
        let mut input = ScrollInput::new();
        input.handle_key_press(KeyCode::Left);
        input.handle_key_release(KeyCode::Right);
        assert_eq!(input.intent(), ScrollIntent::new(-1, 0));
    }

    #[test]
    fn opposite_press_replaces_direction() {
        let mut input = ScrollInput::new();
        input.handle_key_press(KeyCode::Left);
        input.handle_key_press(KeyCode::Right);
        assert_eq!(input.intent(), ScrollIntent::new(1, 0));
    }

    #[test]
    fn non_scroll_keys_are_ignored() {
        let mut input = ScrollInput::new();
        assert!(!input.handle_key_press(KeyCode::Char('x')));
        assert!(input.intent().is_none());
    }

    #[test]
    fn hold_expires_without_repeats() {
        let mut input = ScrollInput::new().with_key_release_timeout_ms(100);
        input.handle_key_press(KeyCode::Down);
        input.tick(60);
        assert_eq!(input.intent(), ScrollIntent::new(0, 1));
        input.tick(40);
        assert!(input.intent().is_none());
    }

    #[test]
    fn repeats_keep_the_hold_alive() {
        let mut input = ScrollInput::new().with_key_release_timeout_ms(100);
        input.handle_key_press(KeyCode::Down);
        for _ in 0..20 {
            input.tick(60);
            input.handle_key_press(KeyCode::Down);
        }
        assert_eq!(input.intent(), ScrollIntent::new(0, 1));
    }

    #[test]
    fn no_timeout_when_releases_are_reported() {
        let mut input = ScrollInput::new().without_release_timeout();
        input.handle_key_press(KeyCode::Char('a'));
        input.tick(10_000);
        assert_eq!(input.intent(), ScrollIntent::new(-1, 0));
        input.clear();
        assert!(input.intent().is_none());
    }
}
