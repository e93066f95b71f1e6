//! Pixel surface used for tiles and the composed map image.
//!
//! Coordinates are signed so callers can blit partly off-surface; every
//! operation clips to the buffer instead of failing.

use crate::types::{Rect, Rgb};

/// 2D row-major buffer of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with black. Negative sizes are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Rgb::default())
    }

    pub fn filled(width: i32, height: i32, color: Rgb) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let Some(r) = clip(rect, self.bounds()) else {
            return;
        };
        for y in r.y..r.bottom() {
            let start = (y as usize) * (self.width as usize) + (r.x as usize);
            self.pixels[start..start + r.width as usize].fill(color);
        }
    }

    /// Copy `src_rect` of `src` so its top-left lands at `(dst_x, dst_y)`.
    ///
    /// The copy is clipped against both buffers. Source pixels equal to
    /// `color_key` are skipped, which is how tile corners stay transparent.
    pub fn blit(
        &mut self,
        src: &PixelBuffer,
        src_rect: Rect,
        dst_x: i32,
        dst_y: i32,
        color_key: Option<Rgb>,
    ) {
        let Some(from) = clip(src_rect, src.bounds()) else {
            return;
        };
        // Shift the destination by however much the source clip trimmed.
        let dst = Rect::new(
            dst_x + (from.x - src_rect.x),
            dst_y + (from.y - src_rect.y),
            from.width,
            from.height,
        );
        let Some(to) = clip(dst, self.bounds()) else {
            return;
        };
        let sx0 = from.x + (to.x - dst.x);
        let sy0 = from.y + (to.y - dst.y);

        for dy in 0..to.height {
            for dx in 0..to.width {
                let Some(color) = src.get(sx0 + dx, sy0 + dy) else {
                    continue;
                };
                if color_key == Some(color) {
                    continue;
                }
                self.set(to.x + dx, to.y + dy, color);
            }
        }
    }

    /// Rows of `rect` clipped to this buffer, top to bottom, borrowed in place.
    pub fn view(&self, rect: Rect) -> impl Iterator<Item = &[Rgb]> + '_ {
        let r = clip(rect, self.bounds()).unwrap_or_default();
        let stride = self.width as usize;
        (r.y..r.bottom()).map(move |y| {
            let start = (y as usize) * stride + (r.x as usize);
            &self.pixels[start..start + r.width as usize]
        })
    }

    /// Copy out a sub-rectangle as a new buffer (clipped to this buffer).
    pub fn sub_buffer(&self, rect: Rect) -> PixelBuffer {
        let mut out = PixelBuffer::new(rect.width, rect.height);
        out.blit(self, rect, 0, 0, None);
        out
    }
}

/// Intersection of `rect` with `bounds`, or `None` if they do not overlap.
pub fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let x0 = rect.x.max(bounds.x);
    let y0 = rect.y.max(bounds.y);
    let x1 = rect.right().min(bounds.right());
    let y1 = rect.bottom().min(bounds.bottom());
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const KEY: Rgb = Rgb::new(255, 0, 255);

    #[test]
    fn get_and_set_respect_bounds() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.set(2, 1, RED);
        buf.set(3, 0, RED);
        buf.set(-1, 0, RED);
        assert_eq!(buf.get(2, 1), Some(RED));
        assert_eq!(buf.get(3, 0), None);
        assert_eq!(buf.get(0, -1), None);
        assert_eq!(buf.pixels().iter().filter(|p| **p == RED).count(), 1);
    }

    #[test]
    fn negative_size_allocates_empty_buffer() {
        let buf = PixelBuffer::new(-4, 10);
        assert_eq!(buf.width(), 0);
        assert!(buf.pixels().is_empty());
    }

    #[test]
    fn fill_rect_clips() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(Rect::new(2, 2, 10, 10), RED);
        assert_eq!(buf.get(1, 1), Some(Rgb::default()));
        assert_eq!(buf.get(2, 2), Some(RED));
        assert_eq!(buf.get(3, 3), Some(RED));
    }

    #[test]
    fn blit_copies_sub_rect_at_offset() {
        let mut src = PixelBuffer::new(4, 4);
        src.set(1, 1, RED);
        let mut dst = PixelBuffer::new(4, 4);
        dst.blit(&src, Rect::new(1, 1, 2, 2), 0, 0, None);
        assert_eq!(dst.get(0, 0), Some(RED));
        assert_eq!(dst.get(1, 1), Some(Rgb::default()));
    }

    #[test]
    fn blit_clips_negative_destination() {
        let mut src = PixelBuffer::new(3, 3);
        src.set(2, 2, RED);
        let mut dst = PixelBuffer::new(3, 3);
        dst.blit(&src, src.bounds(), -2, -2, None);
        assert_eq!(dst.get(0, 0), Some(RED));
    }

    #[test]
    fn blit_clips_source_rect_outside_source() {
        let mut src = PixelBuffer::new(2, 2);
        src.set(0, 0, RED);
        let mut dst = PixelBuffer::new(4, 4);
        // Asking for (-1,-1).. shifts the real pixels one step right/down.
        dst.blit(&src, Rect::new(-1, -1, 3, 3), 0, 0, None);
        assert_eq!(dst.get(1, 1), Some(RED));
        assert_eq!(dst.get(0, 0), Some(Rgb::default()));
    }

    #[test]
    fn blit_skips_color_key() {
        let mut src = PixelBuffer::filled(2, 1, KEY);
        src.set(1, 0, RED);
        let mut dst = PixelBuffer::filled(2, 1, Rgb::new(1, 2, 3));
        dst.blit(&src, src.bounds(), 0, 0, Some(KEY));
        assert_eq!(dst.get(0, 0), Some(Rgb::new(1, 2, 3)));
        assert_eq!(dst.get(1, 0), Some(RED));
    }

    #[test]
    fn view_yields_clipped_rows() {
        let mut buf = PixelBuffer::new(4, 3);
        buf.set(2, 1, RED);
        let rows: Vec<&[Rgb]> = buf.view(Rect::new(1, 1, 5, 5)).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0][1], RED);
        assert_eq!(buf.view(Rect::new(9, 9, 2, 2)).count(), 0);
    }

    #[test]
    fn clip_disjoint_is_none() {
        assert_eq!(clip(Rect::new(5, 5, 2, 2), Rect::new(0, 0, 5, 5)), None);
        assert_eq!(
            clip(Rect::new(3, 3, 4, 4), Rect::new(0, 0, 5, 5)),
            Some(Rect::new(3, 3, 2, 2))
        );
    }
}
