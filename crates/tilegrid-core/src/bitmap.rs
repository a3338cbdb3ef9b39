//! The [`Bitmap`] type — a small owned RGBA image.
//!
//! Pixels are packed `0xAARRGGBB` words, one per pixel, row-major. Alpha 0
//! means fully transparent (masked out when blitted), 255 fully opaque.

use std::fmt;

/// An owned RGBA bitmap with packed `0xAARRGGBB` pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Create a fully transparent bitmap of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Create a bitmap filled with a single packed pixel value.
    pub fn from_pixel(width: u32, height: u32, pixel: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; (width as usize) * (height as usize)],
        }
    }

    /// Create a bitmap from a row-major pixel buffer.
    ///
    /// `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer does not match bitmap dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed pixel at `(x, y)`, or `None` outside the bitmap.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
        } else {
            None
        }
    }

    /// Set the packed pixel at `(x, y)`. No-op outside the bitmap.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = pixel;
        }
    }

    /// The raw row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_transparent() {
        let b = Bitmap::new(4, 3);
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 3);
        assert!(b.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn pixel_accessors() {
        let mut b = Bitmap::new(2, 2);
        b.set_pixel(1, 0, 0xFF112233);
        assert_eq!(b.pixel(1, 0), Some(0xFF112233));
        assert_eq!(b.pixel(0, 0), Some(0));
        assert_eq!(b.pixel(2, 0), None);
        assert_eq!(b.pixel(0, 2), None);
    }

    #[test]
    fn set_pixel_out_of_bounds_is_noop() {
        let mut b = Bitmap::new(2, 2);
        b.set_pixel(5, 5, 0xFFFFFFFF);
        assert!(b.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    #[should_panic]
    fn from_pixels_rejects_wrong_length() {
        let _ = Bitmap::from_pixels(2, 2, vec![0; 3]);
    }
}
