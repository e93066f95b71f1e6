//! Board module - the cells of a map and its pre-composed image
//!
//! Cells are stored in a flat row-major vector (`row * cols + col`). Each cell
//! picks a tile variant once, at construction, from the injected RNG.
//!
//! The whole map is drawn exactly once into a single [`PixelBuffer`]. Frames
//! then only copy the visible rectangle out of it instead of redrawing every
//! tile; the board is static, so the image never needs to be refreshed.

use crate::error::{HexError, Result};
use crate::hex_grid::HexGrid;
use crate::rng::SimpleRng;
use crate::surface::PixelBuffer;
use crate::tileset::Tileset;
use crate::types::{PixelPos, MAP_BACKGROUND};

/// One hex on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
    /// Index into the tileset, `< image_count`.
    pub variant: u32,
}

/// A grid of cells plus the composed map image.
#[derive(Debug, Clone)]
pub struct Board {
    grid: HexGrid,
    cells: Vec<Cell>,
    surface: PixelBuffer,
}

impl Board {
    /// Create a board whose cells draw images from `tileset`.
    pub fn new(grid: HexGrid, tileset: &Tileset, rng: &mut SimpleRng) -> Result<Self> {
        if tileset.is_empty() {
            return Err(HexError::EmptyTileset);
        }
        Self::with_painter(grid, tileset.len() as u32, rng, |cell, (x, y), surface| {
            if let Some(tile) = tileset.get(cell.variant) {
                surface.blit(&tile.image, tile.image.bounds(), x, y, tile.color_key);
            }
        })
    }

    /// Create a board with a custom per-cell draw callback.
    ///
    /// `paint` is called once per cell, row-major, with the cell's top-left
    /// screen position and the surface being composed.
    pub fn with_painter<F>(
        grid: HexGrid,
        image_count: u32,
        rng: &mut SimpleRng,
        mut paint: F,
    ) -> Result<Self>
    where
        F: FnMut(&Cell, PixelPos, &mut PixelBuffer),
    {
        if image_count == 0 {
            return Err(HexError::EmptyTileset);
        }

        let cells: Vec<Cell> = grid
            .positions()
            .map(|(col, row)| Cell {
                col,
                row,
                variant: rng.next_below(image_count),
            })
            .collect();

        let mut surface = PixelBuffer::filled(grid.pixel_width(), grid.pixel_height(), MAP_BACKGROUND);
        for cell in &cells {
            paint(cell, grid.screen_position(cell.col, cell.row), &mut surface);
        }

        log::info!(
            "composed {}x{} board into {}x{} px surface",
            grid.cols(),
            grid.rows(),
            surface.width(),
            surface.height()
        );

        Ok(Self {
            grid,
            cells,
            surface,
        })
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn pixel_width(&self) -> i32 {
        self.grid.pixel_width()
    }

    pub fn pixel_height(&self) -> i32 {
        self.grid.pixel_height()
    }

    /// Calculate flat index from (col, row); always exclusive bounds.
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.grid.cols() || row >= self.grid.rows() {
            return None;
        }
        Some((row as usize) * (self.grid.cols() as usize) + (col as usize))
    }

    /// The cell at `(col, row)`, or [`HexError::OutOfRange`].
    pub fn cell_at(&self, col: i32, row: i32) -> Result<&Cell> {
        self.index(col, row)
            .map(|i| &self.cells[i])
            .ok_or(HexError::OutOfRange { col, row })
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The pre-rendered map image. Never modified after construction.
    pub fn composed_surface(&self) -> &PixelBuffer {
        &self.surface
    }
}
