//! Surface that records the command stream instead of drawing it.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::surface::{Paint, Path, Stroke, Surface, TextStyle};

/// One call made against a [`Surface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::clear_rect`]
    ClearRect(Rect),
    /// [`Surface::fill_rect`]
    FillRect {
        /// Target rectangle.
        rect: Rect,
        /// Fill paint.
        paint: Paint,
    },
    /// [`Surface::stroke_rect`]
    StrokeRect {
        /// Target rectangle.
        rect: Rect,
        /// Stroke style.
        stroke: Stroke,
    },
    /// [`Surface::fill_path`]
    FillPath {
        /// Path to fill.
        path: Path,
        /// Fill paint.
        paint: Paint,
    },
    /// [`Surface::stroke_path`]
    StrokePath {
        /// Path to stroke.
        path: Path,
        /// Stroke style.
        stroke: Stroke,
    },
    /// [`Surface::fill_circle`]
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f32,
        /// Fill color.
        color: Rgba,
    },
    /// [`Surface::fill_text`]
    FillText {
        /// The string drawn.
        text: String,
        /// Baseline origin.
        at: Point,
        /// Text style.
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Issue this command against `target`.
    pub fn apply(&self, target: &mut dyn Surface) {
        match self {
            Self::ClearRect(rect) => target.clear_rect(*rect),
            Self::FillRect { rect, paint } => target.fill_rect(*rect, paint),
            Self::StrokeRect { rect, stroke } => target.stroke_rect(*rect, *stroke),
            Self::FillPath { path, paint } => target.fill_path(path, paint),
            Self::StrokePath { path, stroke } => target.stroke_path(path, *stroke),
            Self::FillCircle { center, radius, color } => target.fill_circle(*center, *radius, *color),
            Self::FillText { text, at, style } => target.fill_text(text, *at, style),
        }
    }
}

/// Records every command it receives, in order.
///
/// A clear covering the whole surface drops everything recorded before it, so
/// a surface redrawn on every tick holds at most one frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    /// Commands received so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands received since the most recent clear (including it).
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|cmd| matches!(cmd, DrawCommand::ClearRect(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Replay the last frame onto `target`.
    pub fn replay(&self, target: &mut dyn Surface) {
        for cmd in self.last_frame() {
            cmd.apply(target);
        }
    }

    /// Strings drawn in the last frame, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        let bounds = self.bounds();
        let covers = rect.x <= bounds.x
            && rect.y <= bounds.y
            && rect.right() >= bounds.right()
            && rect.bottom() >= bounds.bottom();

        if covers {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect { rect, paint: *paint });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand::FillPath { path: path.clone(), paint: *paint });
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), at, style: *style });
    }
}
