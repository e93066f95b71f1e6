//! Hex grid geometry - offset-column addressing, adjacency, pixel positions
//!
//! Flat-top hexagons laid out in columns. Odd columns are shifted down by
//! half a tile so neighbouring columns interlock ("odd-q" offset layout):
//!
//! ```text
//!  __    __
//! /0,0\__/2,0\
//! \__/1,0\__/
//! /0,1\__/2,1\
//! \__/1,1\__/
//! ```
//!
//! All positions are pure functions of the grid coordinates and the tile
//! constants. Nothing here touches pixels; see [`crate::board`] for that.

use arrayvec::ArrayVec;

use crate::error::{HexError, Result};
use crate::types::{Direction, GridPos, PixelPos};

/// How [`HexGrid::is_valid`] treats the upper bound of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// `0 <= col < cols`, `0 <= row < rows`.
    #[default]
    Exclusive,
    /// `0 <= col <= cols`, `0 <= row <= rows`: one phantom column and row past
    /// the declared size. Matches the footprint of older maps.
    InclusiveUpper,
}

/// Immutable grid extents plus the pixel size of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGrid {
    cols: i32,
    rows: i32,
    hex_width: i32,
    hex_height: i32,
    hex_short_width: i32,
    bounds: BoundsPolicy,
}

impl HexGrid {
    /// Create a grid of `cols x rows` tiles.
    ///
    /// Fails with [`HexError::InvalidDimensions`] unless `cols, rows >= 1`,
    /// tile sizes are positive, `hex_short_width < hex_width`, and the cell
    /// count and composed image size fit in `i32`.
    pub fn new(
        cols: i32,
        rows: i32,
        hex_width: i32,
        hex_height: i32,
        hex_short_width: i32,
    ) -> Result<Self> {
        let shape_ok = cols >= 1
            && rows >= 1
            && hex_height >= 2
            && hex_short_width >= 2
            && hex_short_width < hex_width;
        if !shape_ok || !extents_fit(cols, rows, hex_width, hex_height, hex_short_width) {
            return Err(HexError::InvalidDimensions {
                cols,
                rows,
                hex_width,
                hex_height,
                hex_short_width,
            });
        }
        Ok(Self {
            cols,
            rows,
            hex_width,
            hex_height,
            hex_short_width,
            bounds: BoundsPolicy::Exclusive,
        })
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn hex_width(&self) -> i32 {
        self.hex_width
    }

    pub fn hex_height(&self) -> i32 {
        self.hex_height
    }

    pub fn hex_short_width(&self) -> i32 {
        self.hex_short_width
    }

    pub fn bounds(&self) -> BoundsPolicy {
        self.bounds
    }

    /// Width of the composed map image in pixels.
    ///
    /// Adjacent columns share their border pixel, hence the `- 1`s.
    pub fn pixel_width(&self) -> i32 {
        (self.hex_short_width - 1) * (self.cols - 1) + (self.hex_width - 1)
    }

    /// Height of the composed map image in pixels, including the half tile
    /// the odd columns hang below the last row.
    pub fn pixel_height(&self) -> i32 {
        (self.hex_height - 1) * self.rows + 1 + self.hex_height / 2
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        (self.pixel_width(), self.pixel_height())
    }

    /// Top-left pixel of the tile's bounding box.
    pub fn screen_position(&self, col: i32, row: i32) -> PixelPos {
        let x = (self.hex_short_width - 1) * col;
        let mut y = (self.hex_height - 1) * row;
        if is_odd(col) {
            y += (self.hex_height + 1) / 2 - 1;
        }
        (x, y)
    }

    /// Center of a tile relative to its own top-left corner.
    pub fn center_offset(&self) -> PixelPos {
        ((self.hex_width + 1) / 2, (self.hex_height + 1) / 2)
    }

    /// Visual center of the tile, for anything drawn on top of the grid.
    pub fn center_position(&self, col: i32, row: i32) -> PixelPos {
        let (x, y) = self.screen_position(col, row);
        let (cx, cy) = self.center_offset();
        (x + cx, y + cy)
    }

    /// Whether `(col, row)` is on the board under this grid's [`BoundsPolicy`].
    pub fn is_valid(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 {
            return false;
        }
        match self.bounds {
            BoundsPolicy::Exclusive => col < self.cols && row < self.rows,
            BoundsPolicy::InclusiveUpper => col <= self.cols && row <= self.rows,
        }
    }

    /// Neighbour of `(col, row)` in `direction`, or `None` when it falls off the board.
    pub fn adjacent(&self, col: i32, row: i32, direction: Direction) -> Option<GridPos> {
        let (dc, dr) = direction.offset(is_odd(col));
        let (c, r) = (col.checked_add(dc)?, row.checked_add(dr)?);
        self.is_valid(c, r).then_some((c, r))
    }

    /// [`Self::adjacent`] for a textual direction such as `"below_left"`.
    ///
    /// Unknown tokens are a caller bug and fail with [`HexError::InvalidDirection`].
    pub fn adjacent_named(&self, col: i32, row: i32, direction: &str) -> Result<Option<GridPos>> {
        let d = Direction::from_str(direction)
            .ok_or_else(|| HexError::InvalidDirection(direction.to_string()))?;
        Ok(self.adjacent(col, row, d))
    }

    /// All on-board neighbours, in [`Direction::ALL`] order.
    ///
    /// Stack-only; safe to call from per-frame code.
    pub fn all_adjacent(&self, col: i32, row: i32) -> ArrayVec<GridPos, 6> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.adjacent(col, row, d))
            .collect()
    }

    /// Cell whose center is closest to map pixel `(x, y)`.
    ///
    /// Estimates the column/row from the tile pitch, then compares
    /// [`square_distance`] to the centers of the surrounding candidates.
    /// Returns `None` for pixels outside the composed map.
    pub fn hex_at_pixel(&self, x: i32, y: i32) -> Option<GridPos> {
        if x < 0 || y < 0 || x >= self.pixel_width() || y >= self.pixel_height() {
            return None;
        }
        let col_guess = x / (self.hex_short_width - 1);
        let row_guess = y / (self.hex_height - 1);

        let mut best: Option<(i64, GridPos)> = None;
        for col in col_guess - 1..=col_guess + 1 {
            for row in row_guess - 1..=row_guess + 1 {
                if col < 0 || row < 0 || col >= self.cols || row >= self.rows {
                    continue;
                }
                let dist = square_distance(self.center_position(col, row), (x, y));
                if best.map_or(true, |(d, _)| dist < d) {
                    best = Some((dist, (col, row)));
                }
            }
        }
        best.map(|(_, pos)| pos)
    }

    /// Every in-grid coordinate, row-major.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (col, row)))
    }
}

/// Cell count and both pixel extents fit in `i32`.
///
/// Screen positions (including the phantom row/column of
/// [`BoundsPolicy::InclusiveUpper`]) never exceed the pixel extents, so this
/// also bounds every [`HexGrid::screen_position`] on the grid.
fn extents_fit(cols: i32, rows: i32, hex_width: i32, hex_height: i32, hex_short_width: i32) -> bool {
    let width = (hex_short_width - 1)
        .checked_mul(cols - 1)
        .and_then(|w| w.checked_add(hex_width - 1));
    let height = (hex_height - 1)
        .checked_mul(rows)
        .and_then(|h| h.checked_add(1 + hex_height / 2));
    let cells = cols.checked_mul(rows);
    width.is_some() && height.is_some() && cells.is_some()
}

#[inline(always)]
fn is_odd(col: i32) -> bool {
    col.rem_euclid(2) == 1
}

/// Straight-line distance between two points, truncated toward zero.
///
/// This is plain Euclidean distance over whatever space the caller passes in
/// (pixels or raw grid coordinates). It is not the hex step count.
///
/// Exact for every pair of `i32` points; the widest case (opposite corners of
/// the `i32` plane) is about `6.07e9`, hence the `i64` result.
pub fn square_distance(p1: (i32, i32), p2: (i32, i32)) -> i64 {
    let dx = (p1.0 as i64 - p2.0 as i64).unsigned_abs() as u128;
    let dy = (p1.1 as i64 - p2.1 as i64).unsigned_abs() as u128;
    let sq = dx * dx + dy * dy;

    // f64 gets within one of the root; settle the last step in integers.
    let mut root = (sq as f64).sqrt() as u128;
    while root * root > sq {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= sq {
        root += 1;
    }
    root as i64
}
