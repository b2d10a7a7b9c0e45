//! Vector surface rendered to an SVG document.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path as FsPath;

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::surface::{LinearGradient, Paint, Path, Stroke, Surface, TextStyle};

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle, filled and/or stroked.
    Rect { rect: Rect, fill: Option<Paint>, stroke: Option<Stroke> },
    /// Filled circle.
    Circle { cx: f32, cy: f32, r: f32, fill: Rgba },
    /// Path, filled or stroked.
    Path { points: Vec<Point>, closed: bool, fill: Option<Paint>, stroke: Option<Stroke> },
    /// Text.
    Text { x: f32, y: f32, text: String, font_size: f32, fill: Rgba },
}

/// Surface that accumulates [`SvgElement`]s.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    /// Background color (None for transparent).
    background: Option<Rgba>,
    elements: Vec<SvgElement>,
}

impl SvgSurface {
    /// Create an empty SVG surface with a transparent background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: None, elements: Vec::new() }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Elements drawn since the last full clear.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Render to an SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);
        let mut defs = String::new();
        let mut body = String::new();
        let mut gradients = 0usize;

        if let Some(bg) = self.background {
            let _ = writeln!(body, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.to_css());
        }

        for element in &self.elements {
            let line = element_to_svg(element, &mut defs, &mut gradients);
            let _ = writeln!(body, "  {line}");
        }

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if !defs.is_empty() {
            let _ = write!(svg, "  <defs>\n{defs}  </defs>\n");
        }
        svg.push_str(&body);
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the rendered document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file(&self, path: impl AsRef<FsPath>) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Clearing the full bounds drops every element. A partial clear paints
    /// the background over the region; with a transparent background it
    /// cannot erase and does nothing.
    fn clear_rect(&mut self, rect: Rect) {
        let bounds = self.bounds();
        let covers = rect.x <= bounds.x
            && rect.y <= bounds.y
            && rect.right() >= bounds.right()
            && rect.bottom() >= bounds.bottom();

        if covers {
            self.elements.clear();
        } else if let Some(bg) = self.background {
            self.elements.push(SvgElement::Rect { rect, fill: Some(Paint::Solid(bg)), stroke: None });
        }
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.elements.push(SvgElement::Rect { rect, fill: Some(*paint), stroke: None });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.elements.push(SvgElement::Rect { rect, fill: None, stroke: Some(stroke) });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if path.points().len() < 3 {
            return;
        }
        self.elements.push(SvgElement::Path {
            points: path.points().to_vec(),
            closed: true,
            fill: Some(*paint),
            stroke: None,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        if path.points().len() < 2 {
            return;
        }
        self.elements.push(SvgElement::Path {
            points: path.points().to_vec(),
            closed: path.is_closed(),
            fill: None,
            stroke: Some(stroke),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.elements.push(SvgElement::Circle { cx: center.x, cy: center.y, r: radius, fill: color });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.elements.push(SvgElement::Text {
            x: at.x,
            y: at.y,
            text: text.to_string(),
            font_size: style.size,
            fill: style.color,
        });
    }
}

/// `fill` attribute value; gradients are appended to `defs`.
fn paint_attr(paint: Option<&Paint>, defs: &mut String, gradients: &mut usize) -> String {
    match paint {
        None => "none".to_string(),
        Some(Paint::Solid(color)) => color.to_css(),
        Some(Paint::Linear(gradient)) => {
            let id = format!("grad{}", *gradients);
            *gradients += 1;
            write_gradient_def(defs, &id, gradient);
            format!("url(#{id})")
        }
    }
}

fn write_gradient_def(defs: &mut String, id: &str, gradient: &LinearGradient) {
    let stop = |offset: u8, color: Rgba| {
        format!(
            r#"<stop offset="{offset}" stop-color="rgb({},{},{})" stop-opacity="{:.3}"/>"#,
            color.r,
            color.g,
            color.b,
            color.opacity()
        )
    };
    let _ = writeln!(
        defs,
        r#"    <linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="{}">{}{}</linearGradient>"#,
        gradient.y0,
        gradient.y1,
        stop(0, gradient.start),
        stop(1, gradient.end)
    );
}

fn stroke_attr(stroke: Option<&Stroke>) -> String {
    stroke
        .map(|s| format!(r#" stroke="{}" stroke-width="{}""#, s.color.to_css(), s.width))
        .unwrap_or_default()
}

fn path_data(points: &[Point], closed: bool) -> String {
    let mut d = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        let _ = write!(d, "{}{} {} ", if i == 0 { "M" } else { "L" }, p.x, p.y);
    }
    if closed {
        d.push('Z');
    }
    d.trim_end().to_string()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn element_to_svg(element: &SvgElement, defs: &mut String, gradients: &mut usize) -> String {
    match element {
        SvgElement::Rect { rect, fill, stroke } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            rect.x,
            rect.y,
            rect.width.max(0.0),
            rect.height.max(0.0),
            paint_attr(fill.as_ref(), defs, gradients),
            stroke_attr(stroke.as_ref())
        ),
        SvgElement::Circle { cx, cy, r, fill } => {
            format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#, fill.to_css())
        }
        SvgElement::Path { points, closed, fill, stroke } => format!(
            r#"<path d="{}" fill="{}"{} stroke-linejoin="round"/>"#,
            path_data(points, *closed),
            paint_attr(fill.as_ref(), defs, gradients),
            stroke_attr(stroke.as_ref())
        ),
        SvgElement::Text { x, y, text, font_size, fill } => format!(
            r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" font-family="Inter, sans-serif">{}</text>"#,
            fill.to_css(),
            escape_xml(text)
        ),
    }
}
