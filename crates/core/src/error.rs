//! Error type for the core geometry and surface code.

use thiserror::Error;

/// Errors raised by grid, board and tileset construction or lookups.
///
/// Lookups never clamp silently: a bad coordinate or token is reported to the
/// caller. Only the viewport pan position is clamped, and that is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// A direction token that is not one of the six known names.
    #[error("invalid direction {0:?}")]
    InvalidDirection(String),

    /// Grid coordinates outside `[0, cols) x [0, rows)`.
    #[error("cell ({col}, {row}) is outside the board")]
    OutOfRange { col: i32, row: i32 },

    /// Grid extents or tile sizes that break the layout invariants.
    #[error("invalid grid: {cols}x{rows} cells, tile {hex_width}x{hex_height} (short width {hex_short_width})")]
    InvalidDimensions {
        cols: i32,
        rows: i32,
        hex_width: i32,
        hex_height: i32,
        hex_short_width: i32,
    },

    /// Atlas dimensions are not an exact multiple of the tile size.
    #[error("atlas {atlas_width}x{atlas_height} is not a multiple of tile size {tile_width}x{tile_height}")]
    AtlasSize {
        atlas_width: i32,
        atlas_height: i32,
        tile_width: i32,
        tile_height: i32,
    },

    /// A board needs at least one tile image to pick variants from.
    #[error("tileset has no images")]
    EmptyTileset,
}

pub type Result<T> = std::result::Result<T, HexError>;
