//! Drawing surface capability interface.
//!
//! Charts never talk to a concrete backend. They look a [`Surface`] up by
//! name in a [`SurfaceRegistry`] and issue immediate-mode commands against
//! it: clear, fill/stroke rectangles and paths, filled circles and text.
//! An absent name is a valid state and is skipped by the caller.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

// ============================================================================
// Paint
// ============================================================================

/// Vertical linear gradient with two color stops.
///
/// `start` applies at `y0`, `end` at `y1`; rows outside the span take the
/// nearest stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    /// Y coordinate of the first stop.
    pub y0: f32,
    /// Y coordinate of the second stop.
    pub y1: f32,
    /// Color at `y0`.
    pub start: Rgba,
    /// Color at `y1`.
    pub end: Rgba,
}

impl LinearGradient {
    /// Create a vertical gradient.
    #[must_use]
    pub const fn vertical(y0: f32, y1: f32, start: Rgba, end: Rgba) -> Self {
        Self { y0, y1, start, end }
    }

    /// Interpolated color at row `y`.
    #[must_use]
    pub fn color_at(&self, y: f32) -> Rgba {
        let span = self.y1 - self.y0;
        if span.abs() < f32::EPSILON || !span.is_finite() {
            return self.start;
        }
        self.start.lerp(self.end, (y - self.y0) / span)
    }
}

/// Fill style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// One color everywhere.
    Solid(Rgba),
    /// Vertical two-stop gradient.
    Linear(LinearGradient),
}

impl Paint {
    /// Color at row `y`.
    #[must_use]
    pub fn color_at(&self, y: f32) -> Rgba {
        match self {
            Self::Solid(color) => *color,
            Self::Linear(gradient) => gradient.color_at(y),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Self::Solid(color)
    }
}

/// Stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba,
    /// Line width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Create a stroke style.
    #[must_use]
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Text style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Fill color.
    pub color: Rgba,
    /// Font size in pixels.
    pub size: f32,
}

impl TextStyle {
    /// Create a text style.
    #[must_use]
    pub const fn new(color: Rgba, size: f32) -> Self {
        Self { color, size }
    }
}

// ============================================================================
// Path
// ============================================================================

/// A single open or closed polyline path built with move/line-to calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    points: Vec<Point>,
    closed: bool,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an open path through `points`.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        Self { points: points.to_vec(), closed: false }
    }

    /// Start the path at `point`, discarding anything before it.
    #[must_use]
    pub fn move_to(mut self, point: Point) -> Self {
        self.points.clear();
        self.points.push(point);
        self.closed = false;
        self
    }

    /// Extend the path with a straight segment to `point`.
    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Close the path back to its first point.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Path vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// True if [`Path::close`] was called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True if the path has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ============================================================================
// Surface
// ============================================================================

/// Immediate-mode 2D drawing target with fixed pixel dimensions.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Erase a region back to the surface background.
    fn clear_rect(&mut self, rect: Rect);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    /// Outline an axis-aligned rectangle, stroke centered on its edges.
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    /// Fill the interior of a path (implicitly closed).
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Stroke the segments of a path.
    fn stroke_path(&mut self, path: &Path, stroke: Stroke);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Draw text with its baseline starting at `at`.
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);

    /// Bounds of the whole surface.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32)
    }

    /// Erase the whole surface.
    fn clear(&mut self) {
        let bounds = self.bounds();
        self.clear_rect(bounds);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        (**self).fill_rect(rect, paint);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        (**self).stroke_rect(rect, stroke);
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        (**self).fill_path(path, paint);
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        (**self).stroke_path(path, stroke);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        (**self).fill_circle(center, radius, color);
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        (**self).fill_text(text, at, style);
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Lookup of drawing surfaces by stable name.
pub trait SurfaceRegistry {
    /// The surface registered under `name`, if any.
    fn surface_mut(&mut self, name: &str) -> Option<&mut dyn Surface>;
}

/// HashMap-backed [`SurfaceRegistry`].
///
/// Generic over the surface type so hosts get their concrete surfaces back
/// (e.g. to encode a raster surface as PNG). Use `Box<dyn Surface + Send>`
/// to mix backends.
#[derive(Debug)]
pub struct Surfaces<S> {
    entries: HashMap<String, S>,
}

impl<S> Default for Surfaces<S> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<S> Surfaces<S> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, surface: S) -> Option<S> {
        self.entries.insert(name.into(), surface)
    }

    /// Builder-style [`Surfaces::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, surface: S) -> Self {
        self.insert(name, surface);
        self
    }

    /// Unregister a surface.
    pub fn remove(&mut self, name: &str) -> Option<S> {
        self.entries.remove(name)
    }

    /// Borrow a surface by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&S> {
        self.entries.get(name)
    }

    /// Mutably borrow a surface by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut S> {
        self.entries.get_mut(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, surface)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> {
        self.entries.iter().map(|(name, surface)| (name.as_str(), surface))
    }

    /// Number of registered surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no surface is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Surface> SurfaceRegistry for Surfaces<S> {
    fn surface_mut(&mut self, name: &str) -> Option<&mut dyn Surface> {
        self.entries.get_mut(name).map(|surface| surface as &mut dyn Surface)
    }
}
