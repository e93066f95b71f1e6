//! Board tests - cell variants and the composed map image

use hexwar::core::{Board, HexError, HexGrid, SimpleRng, Tileset};
use hexwar::types::{
    Rgb, HEX_HEIGHT, HEX_SHORT_WIDTH, HEX_WIDTH, IMAGE_COUNT, MAP_BACKGROUND, TERRAIN_PALETTE,
    TILE_KEY_COLOR,
};

fn grid(cols: i32, rows: i32) -> HexGrid {
    HexGrid::new(cols, rows, HEX_WIDTH, HEX_HEIGHT, HEX_SHORT_WIDTH).unwrap()
}

fn tiles() -> Tileset {
    Tileset::generated(
        HEX_WIDTH,
        HEX_HEIGHT,
        HEX_SHORT_WIDTH,
        &TERRAIN_PALETTE,
        TILE_KEY_COLOR,
    )
    .unwrap()
}

fn board(cols: i32, rows: i32, seed: u32) -> Board {
    Board::new(grid(cols, rows), &tiles(), &mut SimpleRng::new(seed)).unwrap()
}

#[test]
fn test_board_has_one_cell_per_position() {
    let b = board(6, 4, 1);
    assert_eq!(b.cols(), 6);
    assert_eq!(b.rows(), 4);
    assert_eq!(b.cells().count(), 24);

    for (col, row) in b.grid().positions() {
        let cell = b.cell_at(col, row).unwrap();
        assert_eq!((cell.col, cell.row), (col, row));
        assert!(cell.variant < IMAGE_COUNT);
    }
}

#[test]
fn test_same_seed_same_board() {
    let a = board(10, 8, 42);
    let b = board(10, 8, 42);
    assert!(a.cells().eq(b.cells()));
    assert_eq!(a.composed_surface(), b.composed_surface());
}

#[test]
fn test_different_seeds_differ() {
    let a = board(10, 8, 1);
    let b = board(10, 8, 2);
    assert!(!a.cells().eq(b.cells()));
}

#[test]
fn test_variants_cover_the_tileset() {
    let b = board(20, 20, 7);
    let mut seen = [false; IMAGE_COUNT as usize];
    for cell in b.cells() {
        seen[cell.variant as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_cell_at_out_of_range() {
    let b = board(4, 3, 1);
    assert_eq!(b.cell_at(4, 0), Err(HexError::OutOfRange { col: 4, row: 0 }));
    assert_eq!(b.cell_at(0, 3), Err(HexError::OutOfRange { col: 0, row: 3 }));
    assert!(b.cell_at(-1, 0).is_err());
}

#[test]
fn test_cell_at_ignores_legacy_bounds() {
    let g = grid(4, 3).with_bounds(hexwar::core::BoundsPolicy::InclusiveUpper);
    let b = Board::new(g, &tiles(), &mut SimpleRng::new(1)).unwrap();
    assert!(b.grid().is_valid(4, 3));
    assert!(b.cell_at(4, 3).is_err());
}

#[test]
fn test_surface_matches_grid_size() {
    let b = board(10, 10, 1);
    let s = b.composed_surface();
    assert_eq!((s.width(), s.height()), b.grid().pixel_size());
    assert_eq!(s.width(), 288);
}

#[test]
fn test_surface_shows_each_cell_tile_at_its_center() {
    let set = tiles();
    let b = Board::new(grid(5, 4), &set, &mut SimpleRng::new(3)).unwrap();
    let (ox, oy) = b.grid().center_offset();

    for cell in b.cells() {
        let tile = set.get(cell.variant).unwrap();
        let (cx, cy) = b.grid().center_position(cell.col, cell.row);
        assert_eq!(b.composed_surface().get(cx, cy), tile.image.get(ox, oy));
    }
}

#[test]
fn test_tile_corners_stay_background() {
    let b = board(3, 3, 1);
    // Top-left corner of tile (0, 0) is outside the hexagon.
    assert_eq!(b.composed_surface().get(0, 0), Some(MAP_BACKGROUND));
}

#[test]
fn test_painter_called_once_per_cell_at_screen_position() {
    let g = grid(3, 2);
    let mut calls = Vec::new();
    let b = Board::with_painter(g, 2, &mut SimpleRng::new(9), |cell, pos, surface| {
        calls.push(((cell.col, cell.row), pos));
        surface.set(pos.0, pos.1, Rgb::new(255, 255, 255));
    })
    .unwrap();

    assert_eq!(calls.len(), 6);
    for ((col, row), pos) in calls {
        assert_eq!(pos, g.screen_position(col, row));
        assert_eq!(
            b.composed_surface().get(pos.0, pos.1),
            Some(Rgb::new(255, 255, 255))
        );
    }
    assert!(b.cells().all(|c| c.variant < 2));
}

#[test]
fn test_zero_images_rejected() {
    let result = Board::with_painter(grid(2, 2), 0, &mut SimpleRng::new(1), |_, _, _| {});
    assert_eq!(result.err(), Some(HexError::EmptyTileset));
}
