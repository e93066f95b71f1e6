//! Tile images: atlas slicing and the built-in generated hexagon tiles.
//!
//! An atlas is a grid of equally sized tiles. Slicing requires the atlas to be
//! an exact multiple of the tile size; anything else is a construction-time
//! error, never a partial tileset.

use crate::error::{HexError, Result};
use crate::surface::PixelBuffer;
use crate::types::{Rect, Rgb};

/// One tile image and its transparency key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub image: PixelBuffer,
    pub color_key: Option<Rgb>,
}

/// Fixed-size tile images, indexed by cell variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tileset {
    tile_width: i32,
    tile_height: i32,
    tiles: Vec<Tile>,
}

impl Tileset {
    /// Slice `atlas` into `tile_width x tile_height` tiles, left to right then
    /// top to bottom. Each tile's top-left pixel becomes its color key.
    pub fn from_atlas(atlas: &PixelBuffer, tile_width: i32, tile_height: i32) -> Result<Self> {
        let size_error = HexError::AtlasSize {
            atlas_width: atlas.width(),
            atlas_height: atlas.height(),
            tile_width,
            tile_height,
        };
        if tile_width <= 0 || tile_height <= 0 {
            return Err(size_error);
        }
        if atlas.width() % tile_width != 0 || atlas.height() % tile_height != 0 {
            return Err(size_error);
        }

        let cols = atlas.width() / tile_width;
        let rows = atlas.height() / tile_height;
        let mut tiles = Vec::with_capacity((cols * rows) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let rect = Rect::new(col * tile_width, row * tile_height, tile_width, tile_height);
                let image = atlas.sub_buffer(rect);
                let color_key = image.get(0, 0);
                tiles.push(Tile { image, color_key });
            }
        }

        if tiles.is_empty() {
            return Err(HexError::EmptyTileset);
        }
        log::debug!(
            "sliced {} tiles of {}x{} from {}x{} atlas",
            tiles.len(),
            tile_width,
            tile_height,
            atlas.width(),
            atlas.height()
        );
        Ok(Self {
            tile_width,
            tile_height,
            tiles,
        })
    }

    /// Build a one-row atlas of flat-top hexagons, one per palette color, and
    /// slice it.
    ///
    /// The hexagon's slanted edges span `tile_width - short_width` pixels, so
    /// tiles drawn `short_width - 1` apart interlock without gaps.
    pub fn generated(
        tile_width: i32,
        tile_height: i32,
        short_width: i32,
        palette: &[Rgb],
        key: Rgb,
    ) -> Result<Self> {
        if palette.is_empty() {
            return Err(HexError::EmptyTileset);
        }
        let mut atlas = PixelBuffer::filled(tile_width * palette.len() as i32, tile_height, key);
        for (i, &color) in palette.iter().enumerate() {
            draw_hexagon(
                &mut atlas,
                i as i32 * tile_width,
                tile_width,
                tile_height,
                short_width,
                color,
            );
        }
        Self::from_atlas(&atlas, tile_width, tile_height)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile_width(&self) -> i32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> i32 {
        self.tile_height
    }

    pub fn get(&self, variant: u32) -> Option<&Tile> {
        self.tiles.get(variant as usize)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Fill one flat-top hexagon with a one-pixel darker outline and a light
/// dither so neighbouring tiles of the same terrain stay distinguishable.
fn draw_hexagon(
    atlas: &mut PixelBuffer,
    left: i32,
    width: i32,
    height: i32,
    short_width: i32,
    color: Rgb,
) {
    let inset = (width - short_width).max(0);
    let half = ((height - 1) as f32 / 2.0).max(1.0);
    let outline = color.scaled(3, 5);
    let dither = color.scaled(9, 10);

    for y in 0..height {
        // Horizontal inset of the slanted edges on this scanline.
        let dy = (y as f32 - half).abs();
        let edge = ((inset as f32) * dy / half).round() as i32;
        let x0 = edge;
        let x1 = width - 1 - edge;
        if x1 < x0 {
            continue;
        }
        for x in x0..=x1 {
            let border = x <= x0 || x >= x1 || y == 0 || y == height - 1;
            let c = if border {
                outline
            } else if (x * 7 + y * 13) % 11 == 0 {
                dither
            } else {
                color
            };
            atlas.set(left + x, y, c);
        }
    }
}
