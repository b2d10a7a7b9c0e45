//! Framebuffer-backed surface.

use std::path::Path as FsPath;

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::output::PngEncoder;
use crate::render;
use crate::surface::{Paint, Path, Stroke, Surface, TextStyle};

/// Text drawn onto a raster surface.
///
/// The rasterizer has no font engine, so text is kept alongside the pixels
/// rather than burned into them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The string drawn.
    pub text: String,
    /// Baseline origin.
    pub at: Point,
    /// Style used.
    pub style: TextStyle,
}

/// Surface that rasterizes into a [`Framebuffer`].
#[derive(Debug, Clone)]
pub struct RasterSurface {
    fb: Framebuffer,
    background: Rgba,
    text: Vec<TextRun>,
}

impl RasterSurface {
    /// Create a surface cleared to `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self> {
        let mut fb = Framebuffer::new(width, height)?;
        fb.clear(background);
        Ok(Self { fb, background, text: Vec::new() })
    }

    /// The underlying pixels.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Text drawn since the last full clear, in draw order.
    #[must_use]
    pub fn text_runs(&self) -> &[TextRun] {
        &self.text
    }

    /// Encode the pixels as PNG and write them to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png(&self, path: impl AsRef<FsPath>) -> Result<()> {
        PngEncoder::write_to_file(&self.fb, path)
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.fb.width()
    }

    fn height(&self) -> u32 {
        self.fb.height()
    }

    fn clear_rect(&mut self, rect: Rect) {
        let x = rect.x.max(0.0).round() as u32;
        let y = rect.y.max(0.0).round() as u32;
        let w = rect.width.max(0.0).round() as u32;
        let h = rect.height.max(0.0).round() as u32;
        self.fb.fill_rect(x, y, w, h, self.background);
        self.text.retain(|run| !rect.contains(run.at));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        render::fill_rect(&mut self.fb, rect, |y| paint.color_at(y));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        if rect.width >= 0.0 && rect.height >= 0.0 {
            render::stroke_rect(&mut self.fb, rect, stroke.width, stroke.color);
        }
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        render::fill_polygon(&mut self.fb, path.points(), |y| paint.color_at(y));
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        render::draw_polyline(
            &mut self.fb,
            path.points(),
            stroke.width,
            stroke.color,
            path.is_closed(),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        render::fill_circle(&mut self.fb, center.x, center.y, radius, color);
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.text.push(TextRun { text: text.to_string(), at, style: *style });
    }
}
