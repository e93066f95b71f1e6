//! MapView: copies the visible part of the board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout: a fixed side panel on the left, the map on the right. One
//! terminal cell shows one map pixel horizontally and two vertically, so the
//! viewport's visible size in pixels is `(map_cols, 2 * rows)`.

use crate::core::{Board, Viewport};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MAP_BACKGROUND, PANEL_COLOR, TEXT_COLOR};

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub width: u16,
    pub height: u16,
}

impl TermSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Split of the terminal into side panel and map area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayout {
    pub size: TermSize,
    pub panel_cols: u16,
}

impl MapLayout {
    /// The panel never takes more than the whole terminal.
    pub fn for_terminal(size: TermSize, panel_cols: u16) -> Self {
        Self {
            size,
            panel_cols: panel_cols.min(size.width),
        }
    }

    pub fn map_cols(&self) -> u16 {
        self.size.width - self.panel_cols
    }

    /// Size of the visible map area in map pixels.
    pub fn visible_pixels(&self) -> (i32, i32) {
        (self.map_cols() as i32, self.size.height as i32 * 2)
    }
}

/// Renders the side panel and the visible map rectangle.
#[derive(Debug, Clone)]
pub struct MapView {
    title: [&'static str; 2],
    /// Panel background and plain text.
    text: CellStyle,
    /// Title and field labels.
    heading: CellStyle,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            title: ["Hexagon", "War Game"],
            text: CellStyle::new(TEXT_COLOR, PANEL_COLOR),
            heading: CellStyle::new(TEXT_COLOR, PANEL_COLOR).bold(),
        }
    }
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path: keep one framebuffer across
    /// frames; it is only reallocated when the terminal grows.
    pub fn render_into(
        &self,
        board: &Board,
        viewport: &Viewport,
        layout: MapLayout,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(layout.size.width, layout.size.height);

        // Panel first: any text wider than the panel is covered by the map.
        self.draw_panel(fb, board, viewport, layout);
        self.draw_map(fb, board, viewport, layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, viewport: &Viewport, layout: MapLayout) -> FrameBuffer {
        let mut fb = FrameBuffer::new(layout.size.width, layout.size.height);
        self.render_into(board, viewport, layout, &mut fb);
        fb
    }

    fn draw_map(&self, fb: &mut FrameBuffer, board: &Board, viewport: &Viewport, layout: MapLayout) {
        // Pixels past the edge of a map smaller than the view stay background.
        let mut rows = board.composed_surface().view(viewport.visible_rect());
        let pixel = |row: &[Rgb], x: u16| row.get(x as usize).copied().unwrap_or(MAP_BACKGROUND);

        for cy in 0..layout.size.height {
            let top = rows.next().unwrap_or(&[]);
            let bottom = rows.next().unwrap_or(&[]);
            for cx in 0..layout.map_cols() {
                fb.put_pixels(layout.panel_cols + cx, cy, pixel(top, cx), pixel(bottom, cx));
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, board: &Board, viewport: &Viewport, layout: MapLayout) {
        if layout.panel_cols == 0 {
            return;
        }
        fb.fill_rect(0, 0, layout.panel_cols, layout.size.height, ' ', self.text);

        let label = self.heading;
        let value = self.text;
        fb.put_str(3, 1, self.title[0], label);
        fb.put_str(2, 2, self.title[1], label);
        let mut y = 4;

        fb.put_str(1, y, "MAP", label);
        y += 1;
        let x = fb.put_i32(1, y, board.cols(), value);
        let x = fb.put_str(x, y, "x", value);
        fb.put_i32(x, y, board.rows(), value);
        y += 2;

        let (pan_x, pan_y) = viewport.pan();
        fb.put_str(1, y, "PAN", label);
        y += 1;
        let x = fb.put_i32(1, y, pan_x, value);
        let x = fb.put_str(x, y, ",", value);
        fb.put_i32(x, y, pan_y, value);
        y += 2;

        let (cx, cy) = viewport.center();
        fb.put_str(1, y, "HEX", label);
        y += 1;
        match board.grid().hex_at_pixel(cx, cy) {
            Some((col, row)) => {
                let x = fb.put_i32(1, y, col, value);
                let x = fb.put_str(x, y, ",", value);
                fb.put_i32(x, y, row, value);
            }
            None => {
                fb.put_str(1, y, "-", value);
            }
        }

        if layout.size.height >= 3 {
            let dim = CellStyle::new(Rgb::new(240, 210, 190), PANEL_COLOR);
            fb.put_str(1, layout.size.height - 2, "WASD/arrows", dim);
            fb.put_str(1, layout.size.height - 1, "q quit", dim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_splits_panel_and_map() {
        let layout = MapLayout::for_terminal(TermSize::new(80, 24), 20);
        assert_eq!(layout.map_cols(), 60);
        assert_eq!(layout.visible_pixels(), (60, 48));
    }

    #[test]
    fn panel_wider_than_terminal_leaves_no_map() {
        let layout = MapLayout::for_terminal(TermSize::new(10, 5), 20);
        assert_eq!(layout.panel_cols, 10);
        assert_eq!(layout.visible_pixels(), (0, 10));
    }
}
