//! Draw targets.
//!
//! [`DrawTarget`] is the seam between the grid and the display surface it
//! renders to: a pixel viewport of some current size plus a blit
//! primitive. [`FrameBuffer`] is the bundled software implementation.

use crate::Bitmap;

/// A pixel surface that tiles can be composited onto.
///
/// The grid queries `width`/`height` fresh on every draw call, so a target
/// may change size between frames. `blit` must clip against the target's
/// own edges; callers may pass coordinates partially or fully outside it.
pub trait DrawTarget {
    /// Current viewport width in pixels.
    fn width(&self) -> i32;

    /// Current viewport height in pixels.
    fn height(&self) -> i32;

    /// Composite `bitmap` with its top-left corner at `(x, y)`, unflipped
    /// and unrotated. Transparency semantics belong to the bitmap: alpha 0
    /// pixels are skipped, opaque pixels overwrite.
    fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32);
}

// ---------------------------------------------------------------------------
// FrameBuffer
// ---------------------------------------------------------------------------

/// A software [`DrawTarget`]: a packed `0xAARRGGBB` pixel buffer.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Opaque black by default, matching an uninitialized display.
    pub const CLEAR: u32 = 0xFF00_0000;

    /// Create a framebuffer of the given pixel dimensions, cleared to
    /// opaque black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Self::CLEAR; width * height],
        }
    }

    /// Fill the whole buffer with one packed pixel value.
    pub fn clear(&mut self, pixel: u32) {
        self.pixels.fill(pixel);
    }

    /// The raw row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}

impl DrawTarget for FrameBuffer {
    #[inline]
    fn width(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height as i32
    }

    fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        let bw = bitmap.width() as i32;
        let bh = bitmap.height() as i32;

        // Clip the source rectangle against the buffer edges up front so
        // the inner loop stays branch-light.
        let src_x0 = (-x).max(0);
        let src_y0 = (-y).max(0);
        let src_x1 = bw.min(self.width as i32 - x);
        let src_y1 = bh.min(self.height as i32 - y);
        if src_x0 >= src_x1 || src_y0 >= src_y1 {
            return;
        }

        for sy in src_y0..src_y1 {
            let dst_row = ((y + sy) as usize) * self.width;
            for sx in src_x0..src_x1 {
                let src = bitmap
                    .pixel(sx as u32, sy as u32)
                    .unwrap_or(0);
                let alpha = src >> 24;
                if alpha == 0 {
                    continue;
                }
                let idx = dst_row + (x + sx) as usize;
                if alpha == 0xFF {
                    self.pixels[idx] = src;
                } else {
                    self.pixels[idx] = blend(self.pixels[idx], src, alpha);
                }
            }
        }
    }
}

/// Integer alpha-blend of `src` over `dst`, both packed `0xAARRGGBB`.
#[inline]
fn blend(dst: u32, src: u32, alpha: u32) -> u32 {
    let inv = 255 - alpha;
    let r = (((src >> 16) & 0xFF) * alpha + ((dst >> 16) & 0xFF) * inv) / 255;
    let g = (((src >> 8) & 0xFF) * alpha + ((dst >> 8) & 0xFF) * inv) / 255;
    let b = ((src & 0xFF) * alpha + (dst & 0xFF) * inv) / 255;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0xFFFF_0000;

    #[test]
    fn blit_inside() {
        let mut fb = FrameBuffer::new(8, 8);
        let b = Bitmap::from_pixel(2, 2, RED);
        fb.blit(&b, 3, 4);
        assert_eq!(fb.pixel(3, 4), Some(RED));
        assert_eq!(fb.pixel(4, 5), Some(RED));
        assert_eq!(fb.pixel(2, 4), Some(FrameBuffer::CLEAR));
        assert_eq!(fb.pixel(5, 4), Some(FrameBuffer::CLEAR));
    }

    #[test]
    fn blit_clips_left_and_top() {
        let mut fb = FrameBuffer::new(4, 4);
        let b = Bitmap::from_pixel(3, 3, RED);
        fb.blit(&b, -2, -2);
        assert_eq!(fb.pixel(0, 0), Some(RED));
        assert_eq!(fb.pixel(1, 0), Some(FrameBuffer::CLEAR));
        assert_eq!(fb.pixel(0, 1), Some(FrameBuffer::CLEAR));
    }

    #[test]
    fn blit_clips_right_and_bottom() {
        let mut fb = FrameBuffer::new(4, 4);
        let b = Bitmap::from_pixel(3, 3, RED);
        fb.blit(&b, 3, 3);
        assert_eq!(fb.pixel(3, 3), Some(RED));
        assert_eq!(fb.pixel(2, 2), Some(FrameBuffer::CLEAR));
    }

    #[test]
    fn blit_fully_outside_is_noop() {
        let mut fb = FrameBuffer::new(4, 4);
        let b = Bitmap::from_pixel(2, 2, RED);
        fb.blit(&b, -5, 0);
        fb.blit(&b, 0, 10);
        assert!(fb.pixels().iter().all(|&p| p == FrameBuffer::CLEAR));
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut fb = FrameBuffer::new(4, 4);
        let mut b = Bitmap::new(2, 1);
        b.set_pixel(0, 0, RED);
        // (1, 0) stays alpha 0.
        fb.blit(&b, 0, 0);
        assert_eq!(fb.pixel(0, 0), Some(RED));
        assert_eq!(fb.pixel(1, 0), Some(FrameBuffer::CLEAR));
    }

    #[test]
    fn blit_blends_partial_alpha() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.clear(0xFF00_0000);
        let b = Bitmap::from_pixel(1, 1, 0x80FF_0000);
        fb.blit(&b, 0, 0);
        let px = fb.pixel(0, 0).unwrap();
        let r = (px >> 16) & 0xFF;
        // 255 * 128 / 255 = 128.
        assert_eq!(r, 128);
        assert_eq!(px & 0xFF00_0000, 0xFF00_0000);
    }
}
