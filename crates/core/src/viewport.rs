//! Viewport - momentum panning over the composed map image
//!
//! Held scroll keys accelerate a per-axis velocity; the pan offset moves by a
//! fifth of the velocity each tick and is clamped to the map. Friction then
//! pulls the velocity back toward zero: first proportionally, then a final
//! unit step so it always lands on exactly zero instead of creeping.
//!
//! All arithmetic is `i32` with Rust's truncating division, which is
//! symmetric around zero: scrolling left and right decay identically.
//!
//! # Example
//!
//! ```
//! use hexwar_core::Viewport;
//!
//! let mut vp = Viewport::new((1000, 800), 300, 200);
//! assert!(vp.update(0, 0, true)); // first frame
//! assert!(vp.update(1, 0, false));
//! assert_eq!(vp.velocity(), (5, 0));
//! assert_eq!(vp.pan(), (1, 0));
//! ```

use crate::types::{
    Rect, ScrollIntent, FRICTION_DIVISOR, MAX_SCROLL_SPEED, SCROLL_ACCEL, SCROLL_DIVISOR,
};

/// Visible window into the map, with pan momentum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    map_width: i32,
    map_height: i32,
    visible_width: i32,
    visible_height: i32,
    max_pan_x: i32,
    max_pan_y: i32,
    pan_x: i32,
    pan_y: i32,
    velocity_x: i32,
    velocity_y: i32,
}

impl Viewport {
    /// A viewport at the top-left of a `map_size` image, at rest.
    pub fn new(map_size: (i32, i32), visible_width: i32, visible_height: i32) -> Self {
        let mut vp = Self {
            map_width: map_size.0,
            map_height: map_size.1,
            visible_width: 0,
            visible_height: 0,
            max_pan_x: 0,
            max_pan_y: 0,
            pan_x: 0,
            pan_y: 0,
            velocity_x: 0,
            velocity_y: 0,
        };
        vp.resize(visible_width, visible_height);
        vp
    }

    /// Change the visible size (e.g. on terminal resize) and re-clamp the pan.
    pub fn resize(&mut self, visible_width: i32, visible_height: i32) {
        self.visible_width = visible_width.max(0);
        self.visible_height = visible_height.max(0);
        self.max_pan_x = (self.map_width - self.visible_width).max(0);
        self.max_pan_y = (self.map_height - self.visible_height).max(0);
        self.pan_x = self.pan_x.clamp(0, self.max_pan_x);
        self.pan_y = self.pan_y.clamp(0, self.max_pan_y);
    }

    /// Advance one frame. Returns whether the visible image changed (or
    /// `force_redraw` was set) and should be blitted again.
    pub fn update(&mut self, intent_x: i32, intent_y: i32, force_redraw: bool) -> bool {
        let mut redraw = force_redraw;

        self.velocity_x += accel(intent_x);
        self.velocity_y += accel(intent_y);

        if self.velocity_x != 0 || self.velocity_y != 0 {
            self.pan_x = clamped_scroll(self.velocity_x, self.pan_x, self.max_pan_x);
            self.pan_y = clamped_scroll(self.velocity_y, self.pan_y, self.max_pan_y);
            redraw = true;
        }

        self.velocity_x = apply_friction(self.velocity_x);
        self.velocity_y = apply_friction(self.velocity_y);

        redraw
    }

    /// [`Self::update`] taking a [`ScrollIntent`].
    pub fn step(&mut self, intent: ScrollIntent, force_redraw: bool) -> bool {
        self.update(intent.x, intent.y, force_redraw)
    }

    pub fn pan(&self) -> (i32, i32) {
        (self.pan_x, self.pan_y)
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.velocity_x, self.velocity_y)
    }

    pub fn max_pan(&self) -> (i32, i32) {
        (self.max_pan_x, self.max_pan_y)
    }

    pub fn visible_size(&self) -> (i32, i32) {
        (self.visible_width, self.visible_height)
    }

    /// Region of the composed map to copy onto the screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.pan_x, self.pan_y, self.visible_width, self.visible_height)
    }

    /// Map pixel at the middle of the visible area.
    pub fn center(&self) -> (i32, i32) {
        (
            self.pan_x + self.visible_width / 2,
            self.pan_y + self.visible_height / 2,
        )
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity_x == 0 && self.velocity_y == 0
    }
}

#[inline]
fn accel(intent: i32) -> i32 {
    match intent {
        -1 => -SCROLL_ACCEL,
        1 => SCROLL_ACCEL,
        _ => 0,
    }
}

/// Move `pos` by `velocity / SCROLL_DIVISOR`, clamped to `[0, max_pos]`.
pub fn clamped_scroll(velocity: i32, pos: i32, max_pos: i32) -> i32 {
    (pos + velocity / SCROLL_DIVISOR).clamp(0, max_pos.max(0))
}

/// Clamp to `±MAX_SCROLL_SPEED`, shed `1/FRICTION_DIVISOR` of it, then step one
/// unit toward zero.
pub fn apply_friction(velocity: i32) -> i32 {
    let mut v = velocity.clamp(-MAX_SCROLL_SPEED, MAX_SCROLL_SPEED);
    if v != 0 {
        v -= v / FRICTION_DIVISOR;
    }
    v - v.signum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tap_accelerates_then_decays() {
        let mut vp = Viewport::new((1000, 1000), 100, 100);
        assert!(vp.update(1, 0, false));
        // 6 - 6/15 (0) = 6, then one unit toward zero.
        assert_eq!(vp.velocity(), (5, 0));
        assert_eq!(vp.pan(), (1, 0));
    }

    #[test]
    fn idle_viewport_does_not_redraw_unless_forced() {
        let mut vp = Viewport::new((1000, 1000), 100, 100);
        assert!(!vp.update(0, 0, false));
        assert!(vp.update(0, 0, true));
        assert_eq!(vp.pan(), (0, 0));
    }

    #[test]
    fn unknown_intent_values_are_ignored() {
        let mut vp = Viewport::new((1000, 1000), 100, 100);
        assert!(!vp.update(2, -7, false));
        assert!(vp.is_at_rest());
    }

    #[test]
    fn friction_is_symmetric() {
        for v in -60..=60 {
            assert_eq!(apply_friction(-v), -apply_friction(v));
        }
        assert_eq!(apply_friction(0), 0);
        assert_eq!(apply_friction(1), 0);
        assert_eq!(apply_friction(50), 46);
        assert_eq!(apply_friction(56), 46);
    }

    #[test]
    fn clamped_scroll_bounds() {
        assert_eq!(clamped_scroll(50, 0, 5), 5);
        assert_eq!(clamped_scroll(-50, 3, 5), 0);
        assert_eq!(clamped_scroll(4, 3, 5), 3);
        assert_eq!(clamped_scroll(-4, 3, 5), 3);
        assert_eq!(clamped_scroll(10, 0, -3), 0);
    }

    #[test]
    fn map_smaller_than_view_never_pans() {
        let mut vp = Viewport::new((50, 40), 100, 100);
        assert_eq!(vp.max_pan(), (0, 0));
        for _ in 0..100 {
            vp.update(1, 1, false);
        }
        assert_eq!(vp.pan(), (0, 0));
        // Velocity still builds and redraws are still requested.
        assert!(!vp.is_at_rest());
    }

    #[test]
    fn resize_reclamps_pan() {
        let mut vp = Viewport::new((1000, 1000), 100, 100);
        for _ in 0..200 {
            vp.update(1, 1, false);
        }
        assert_eq!(vp.pan(), (900, 900));
        vp.resize(400, 300);
        assert_eq!(vp.max_pan(), (600, 700));
        assert_eq!(vp.pan(), (600, 700));
        assert_eq!(vp.visible_rect(), Rect::new(600, 700, 400, 300));
    }

    #[test]
    fn step_matches_update() {
        let mut a = Viewport::new((1000, 1000), 100, 100);
        let mut b = a.clone();
        a.update(-1, 1, false);
        b.step(ScrollIntent::new(-1, 1), false);
        assert_eq!(a, b);
    }
}
