//! Shared types and constants for the hex map.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the core geometry, the terminal renderer and the input layer
//! alike.
//!
//! # Tile geometry
//!
//! The default tiles are 37x35 pixel flat-top hexagons. Adjacent columns
//! interlock, so the horizontal pitch between columns is the "short" width
//! (29 pixels) minus the shared border pixel.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HEX_WIDTH` | 37 | Tile bounding box width |
//! | `HEX_HEIGHT` | 35 | Tile bounding box height |
//! | `HEX_SHORT_WIDTH` | 29 | Column pitch + 1 |
//! | `IMAGE_COUNT` | 5 | Tile variants drawn at random |
//!
//! # Scroll tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Frame interval (~30 FPS) |
//! | `SCROLL_ACCEL` | 6 | Velocity added per tick of held intent |
//! | `SCROLL_DIVISOR` | 5 | Pan step is `velocity / SCROLL_DIVISOR` |
//! | `MAX_SCROLL_SPEED` | 50 | Velocity clamp applied during friction |
//! | `FRICTION_DIVISOR` | 15 | Proportional friction `velocity / 15` |
//!
//! # Examples
//!
//! ```
//! use hexwar_types::{Direction, HEX_SHORT_WIDTH, HEX_WIDTH};
//!
//! assert!(HEX_SHORT_WIDTH < HEX_WIDTH);
//!
//! let d = Direction::from_str("above_right").unwrap();
//! assert_eq!(d, Direction::AboveRight);
//! assert_eq!(d.opposite(), Direction::BelowLeft);
//! ```

/// Grid coordinate `(col, row)`.
pub type GridPos = (i32, i32);

/// Pixel coordinate `(x, y)` within the composed map surface.
pub type PixelPos = (i32, i32);

/// Tile bounding box width in pixels.
pub const HEX_WIDTH: i32 = 37;

/// Tile bounding box height in pixels.
pub const HEX_HEIGHT: i32 = 35;

/// Short width of a tile: horizontal pitch between columns plus one.
pub const HEX_SHORT_WIDTH: i32 = 29;

/// Number of tile variants a cell can pick from.
pub const IMAGE_COUNT: u32 = 5;

/// Default grid columns.
pub const DEFAULT_COLS: i32 = 60;

/// Default grid rows.
pub const DEFAULT_ROWS: i32 = 40;

/// Frame interval in milliseconds (30 Hz).
pub const TICK_MS: u32 = 33;

/// Velocity change per tick while a scroll direction is held.
pub const SCROLL_ACCEL: i32 = 6;

/// Pan offset moves by `velocity / SCROLL_DIVISOR` per tick.
pub const SCROLL_DIVISOR: i32 = 5;

/// Velocity magnitude clamp, applied at the start of friction.
pub const MAX_SCROLL_SPEED: i32 = 50;

/// Proportional friction: `velocity -= velocity / FRICTION_DIVISOR`.
pub const FRICTION_DIVISOR: i32 = 15;

/// A held direction is dropped after this long without a press/repeat event.
///
/// Long enough to bridge a terminal's auto-repeat delay, so holding a key
/// scrolls continuously even without key-release reporting.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 400;

/// Default side panel width in terminal columns.
pub const DEFAULT_PANEL_COLS: u16 = 20;

/// Side panel background.
pub const PANEL_COLOR: Rgb = Rgb::new(144, 96, 64);

/// Side panel text.
pub const TEXT_COLOR: Rgb = Rgb::new(200, 160, 140);

/// Fill for map pixels no tile covers.
pub const MAP_BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// Corner fill of generated tiles; blits skip it.
pub const TILE_KEY_COLOR: Rgb = Rgb::new(255, 0, 255);

/// Terrain colors for the generated tileset, one per variant.
pub const TERRAIN_PALETTE: [Rgb; IMAGE_COUNT as usize] = [
    Rgb::new(96, 160, 72), // grass
    Rgb::new(40, 104, 48), // forest
    Rgb::new(150, 128, 88), // hills
    Rgb::new(56, 96, 176), // water
    Rgb::new(214, 190, 120), // sand
];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `num / den` (used for tile shading).
    pub const fn scaled(self, num: u16, den: u16) -> Self {
        Self {
            r: ((self.r as u16 * num) / den) as u8,
            g: ((self.g as u16 * num) / den) as u8,
            b: ((self.b as u16 * num) / den) as u8,
        }
    }
}

/// Scroll intent for one frame: each axis is -1, 0 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntent {
    pub x: i32,
    pub y: i32,
}

impl ScrollIntent {
    pub const NONE: ScrollIntent = ScrollIntent { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_none(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// The six neighbours of a hex in the offset-column layout.
///
/// The declaration order is the fixed iteration order used by
/// [`Direction::ALL`]: clockwise starting straight up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Above,
    AboveRight,
    BelowRight,
    Below,
    BelowLeft,
    AboveLeft,
}

impl Direction {
    /// All directions, clockwise from [`Direction::Above`].
    pub const ALL: [Direction; 6] = [
        Direction::Above,
        Direction::AboveRight,
        Direction::BelowRight,
        Direction::Below,
        Direction::BelowLeft,
        Direction::AboveLeft,
    ];

    /// Parse a direction token (case-insensitive, snake_case).
    ///
    /// # Examples
    ///
    /// ```
    /// use hexwar_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("above"), Some(Direction::Above));
    /// assert_eq!(Direction::from_str("BELOW_RIGHT"), Some(Direction::BelowRight));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "above" => Some(Direction::Above),
            "above_right" => Some(Direction::AboveRight),
            "below_right" => Some(Direction::BelowRight),
            "below" => Some(Direction::Below),
            "below_left" => Some(Direction::BelowLeft),
            "above_left" => Some(Direction::AboveLeft),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Above => "above",
            Direction::AboveRight => "above_right",
            Direction::BelowRight => "below_right",
            Direction::Below => "below",
            Direction::BelowLeft => "below_left",
            Direction::AboveLeft => "above_left",
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Above => Direction::Below,
            Direction::AboveRight => Direction::BelowLeft,
            Direction::BelowRight => Direction::AboveLeft,
            Direction::Below => Direction::Above,
            Direction::BelowLeft => Direction::AboveRight,
            Direction::AboveLeft => Direction::BelowRight,
        }
    }

    /// `(Δcol, Δrow)` for a step in this direction from a column of the given parity.
    ///
    /// Odd columns sit half a tile lower than even ones, so the diagonal
    /// neighbours of an even column are one row "higher" than those of an odd one.
    pub fn offset(&self, odd_col: bool) -> (i32, i32) {
        match (self, odd_col) {
            (Direction::Above, _) => (0, -1),
            (Direction::Below, _) => (0, 1),
            (Direction::AboveRight, false) => (1, -1),
            (Direction::AboveRight, true) => (1, 0),
            (Direction::BelowRight, false) => (1, 0),
            (Direction::BelowRight, true) => (1, 1),
            (Direction::AboveLeft, false) => (-1, -1),
            (Direction::AboveLeft, true) => (-1, 0),
            (Direction::BelowLeft, false) => (-1, 0),
            (Direction::BelowLeft, true) => (-1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tile_constants() {
        assert_eq!(HEX_WIDTH, 37);
        assert_eq!(HEX_HEIGHT, 35);
        assert_eq!(HEX_SHORT_WIDTH, 29);
        assert_eq!(TERRAIN_PALETTE.len(), IMAGE_COUNT as usize);
    }

    #[test]
    fn scroll_tuning_defaults() {
        assert_eq!(SCROLL_ACCEL, 6);
        assert_eq!(SCROLL_DIVISOR, 5);
        assert_eq!(MAX_SCROLL_SPEED, 50);
        assert_eq!(FRICTION_DIVISOR, 15);
        assert_eq!(TICK_MS, 33);
    }

    #[test]
    fn direction_round_trips_through_names() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_str(d.as_str()), Some(d));
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::from_str("Below_Left"), Some(Direction::BelowLeft));
        assert_eq!(Direction::from_str("north"), None);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 0, 5).is_empty());
    }
}
