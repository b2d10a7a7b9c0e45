//! RGBA pixel buffer backing the raster surface.
//!
//! Rows are padded to a 64-byte stride so row copies stay cache-line aligned.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// RGBA pixels, `stride` bytes per row.
    pixels: Vec<u8>,
    /// Row width in bytes, including alignment padding.
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_dash::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(320, 160).unwrap();
    /// assert_eq!(fb.width(), 320);
    /// assert_eq!(fb.height(), 160);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self { width, height, pixels, stride })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row width in bytes, including any padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// A row of pixels without its padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.fill_rect(0, 0, self.width, self.height, color);
    }

    /// Overwrite a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let pixel = color.to_array();
        for row_y in y1..y2 {
            let start = self.pixel_index(x1, row_y);
            let end = start + ((x2 - x1) as usize) * 4;
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&pixel);
            }
        }
    }

    /// Color at `(x, y)`, `None` if out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let px = self.pixel(x, y)?;
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Overwrite a single pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(px) = self.pixel_mut(x, y) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Composite `color` over a pixel with source-over, straight alpha.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if color.a == 0 {
            return;
        }
        let Some(px) = self.pixel_mut(x, y) else {
            return;
        };

        let src_a = color.opacity();
        let dst_a = f32::from(px[3]) / 255.0;
        let dst_weight = dst_a * (1.0 - src_a);
        let out_a = src_a + dst_weight;
        if out_a <= 0.0 {
            return;
        }

        let src = color.to_array();
        for (channel, &s) in px[..3].iter_mut().zip(&src[..3]) {
            let mixed = (f32::from(s) * src_a + f32::from(*channel) * dst_weight) / out_a;
            *channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
        px[3] = (out_a * 255.0).round() as u8;
    }

    /// Composite a color over the half-open pixel span `[x0, x1)` of row `y`.
    pub fn blend_span(&mut self, x0: i32, x1: i32, y: i32, color: Rgba) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width as i32);
        for x in start..end {
            self.blend_pixel(x as u32, y as u32, color);
        }
    }

    /// Number of pixels whose alpha is non-zero.
    #[must_use]
    pub fn painted_pixels(&self) -> usize {
        self.rows().flat_map(|row| row.chunks_exact(4)).filter(|px| px[3] != 0).count()
    }

    /// Pixel data without stride padding, as PNG encoders expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        self.rows().flatten().copied().collect()
    }

    fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(&self.pixels[idx..idx + 4])
    }

    fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(&mut self.pixels[idx..idx + 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert!(fb.stride() >= 400);
        assert_eq!(fb.stride() % ROW_ALIGNMENT, 0);
        assert_eq!(fb.painted_pixels(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::NEON_CYAN);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::NEON_CYAN));
        assert_eq!(fb.get_pixel(9, 9), Some(Rgba::NEON_CYAN));
        assert_eq!(fb.painted_pixels(), 100);
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.fill_rect(15, 15, u32::MAX, u32::MAX, Rgba::WHITE);
        assert_eq!(fb.get_pixel(19, 19), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(14, 14), Some(Rgba::TRANSPARENT));
        assert_eq!(fb.painted_pixels(), 25);
    }

    #[test]
    fn test_set_get_pixel_bounds() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(5, 5, Rgba::WHITE);
        fb.set_pixel(50, 50, Rgba::WHITE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(50, 50), None);
    }

    #[test]
    fn test_blend_pixel_over_opaque() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        fb.blend_pixel(1, 1, Rgba::new(255, 0, 0, 128));

        let px = fb.get_pixel(1, 1).unwrap();
        assert_eq!(px.r, 255);
        assert!(px.g > 100 && px.g < 150);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_blend_span_clips() {
        let mut fb = Framebuffer::new(10, 3).unwrap();
        fb.blend_span(-5, 4, 1, Rgba::WHITE);
        fb.blend_span(0, 10, 7, Rgba::WHITE);
        assert_eq!(fb.painted_pixels(), 4);
    }

    #[test]
    fn test_compact_pixels_len() {
        let fb = Framebuffer::new(10, 3).unwrap();
        assert_eq!(fb.to_compact_pixels().len(), 10 * 3 * 4);
    }
}
