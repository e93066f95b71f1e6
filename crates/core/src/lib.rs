//! Core map logic - pure, deterministic, and testable
//!
//! Hex grid geometry, the static board with its pre-composed image, and the
//! momentum viewport that pans over it. There are **no dependencies** on the
//! terminal or on input devices, which keeps this crate:
//!
//! - **Deterministic**: the same seed always yields the same map
//! - **Testable**: every operation is a plain function of its inputs
//! - **Portable**: any host that can copy pixels can display the map
//! - **Fast**: per-frame paths (`Viewport::update`, `HexGrid::all_adjacent`)
//!   do not allocate
//!
//! # Module Structure
//!
//! - [`hex_grid`]: offset-column coordinates, adjacency, pixel positions
//! - [`board`]: cells with random tile variants and the composed map image
//! - [`viewport`]: velocity/friction panning clamped to the map
//! - [`surface`]: the RGB pixel buffer everything draws into
//! - [`tileset`]: atlas slicing and generated hexagon tiles
//! - [`rng`]: seeded LCG used for tile variants
//! - [`error`]: [`HexError`]
//!
//! # Example
//!
//! ```
//! use hexwar_core::{Board, HexGrid, SimpleRng, Tileset, Viewport};
//! use hexwar_core::types::{HEX_HEIGHT, HEX_SHORT_WIDTH, HEX_WIDTH, TERRAIN_PALETTE, TILE_KEY_COLOR};
//!
//! let grid = HexGrid::new(10, 8, HEX_WIDTH, HEX_HEIGHT, HEX_SHORT_WIDTH).unwrap();
//! let tiles = Tileset::generated(HEX_WIDTH, HEX_HEIGHT, HEX_SHORT_WIDTH, &TERRAIN_PALETTE, TILE_KEY_COLOR).unwrap();
//! let board = Board::new(grid, &tiles, &mut SimpleRng::new(42)).unwrap();
//!
//! let mut viewport = Viewport::new(grid.pixel_size(), 120, 80);
//! viewport.update(1, 1, true);
//! let rect = viewport.visible_rect();
//! assert!(rect.right() <= board.pixel_width());
//! ```

pub mod board;
pub mod error;
pub mod hex_grid;
pub mod rng;
pub mod surface;
pub mod tileset;
pub mod viewport;

pub use hexwar_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use error::{HexError, Result};
pub use hex_grid::{square_distance, BoundsPolicy, HexGrid};
pub use rng::SimpleRng;
pub use surface::PixelBuffer;
pub use tileset::{Tile, Tileset};
pub use types::ScrollIntent;
pub use viewport::Viewport;
