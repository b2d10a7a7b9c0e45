//! Primitive rasterization over a [`Framebuffer`].
//!
//! Every primitive composites with "source over" so translucent fills and
//! glows layer the way a browser canvas does.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};

/// Widths at or below this use the 1px anti-aliased line.
const HAIRLINE_WIDTH: f32 = 1.2;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw an anti-aliased hairline using Wu's algorithm.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
        return;
    }

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    let mut plot_pair = |major: i32, minor: f32, weight: f32| {
        let base = minor.floor() as i32;
        let (a, b) = (rfpart(minor) * weight, fpart(minor) * weight);
        if steep {
            plot(fb, base, major, color, a);
            plot(fb, base + 1, major, color, b);
        } else {
            plot(fb, major, base, color, a);
            plot(fb, major, base + 1, color, b);
        }
    };

    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xpxl1 = xend as i32;
    plot_pair(xpxl1, yend, rfpart(x0 + 0.5));
    let mut intery = yend + gradient;

    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xpxl2 = xend as i32;
    plot_pair(xpxl2, yend, fpart(x1 + 0.5));

    for x in (xpxl1 + 1)..xpxl2 {
        plot_pair(x, intery, 1.0);
        intery += gradient;
    }
}

/// Stroke a segment of arbitrary width.
///
/// Thin strokes use [`draw_line_aa`]; wider ones fill the segment's quad.
pub fn draw_thick_line(fb: &mut Framebuffer, a: Point, b: Point, width: f32, color: Rgba) {
    if width <= HAIRLINE_WIDTH {
        draw_line_aa(fb, a.x, a.y, b.x, b.y, color);
        return;
    }

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if !len.is_finite() || len < f32::EPSILON {
        return;
    }

    let half = width / 2.0;
    let nx = -dy / len * half;
    let ny = dx / len * half;
    let quad = [
        Point::new(a.x + nx, a.y + ny),
        Point::new(b.x + nx, b.y + ny),
        Point::new(b.x - nx, b.y - ny),
        Point::new(a.x - nx, a.y - ny),
    ];
    fill_polygon(fb, &quad, |_| color);
}

/// Stroke a polyline with round joins.
pub fn draw_polyline(fb: &mut Framebuffer, points: &[Point], width: f32, color: Rgba, closed: bool) {
    for pair in points.windows(2) {
        draw_thick_line(fb, pair[0], pair[1], width, color);
    }
    if closed && points.len() > 2 {
        draw_thick_line(fb, points[points.len() - 1], points[0], width, color);
    }
    if width > HAIRLINE_WIDTH && points.len() > 2 {
        for joint in &points[1..points.len() - 1] {
            fill_circle(fb, joint.x, joint.y, width / 2.0, color);
        }
    }
}

#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 {
        let alpha = (f32::from(color.a) * intensity.clamp(0.0, 1.0)) as u8;
        fb.blend_pixel(x as u32, y as u32, color.with_alpha(alpha));
    }
}

#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

// ============================================================================
// Polygon Fill
// ============================================================================

/// Fill a polygon with the even-odd rule, sampling at pixel centers.
///
/// `row_color` supplies the color for each row, which is how vertical
/// gradients are applied.
pub fn fill_polygon(fb: &mut Framebuffer, points: &[Point], row_color: impl Fn(f32) -> Rgba) {
    if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
        return;
    }

    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).max(0.0);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).min(fb.height() as f32);

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    let first_row = min_y.floor() as i32;
    let last_row = max_y.ceil() as i32;

    for row in first_row..last_row {
        let yc = row as f32 + 0.5;
        crossings.clear();

        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            // Half-open rule so shared vertices count once.
            if (a.y <= yc && b.y > yc) || (b.y <= yc && a.y > yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }

        crossings.sort_by(f32::total_cmp);
        let color = row_color(yc);
        for span in crossings.chunks_exact(2) {
            let x0 = (span[0] - 0.5).ceil() as i32;
            let x1 = (span[1] - 0.5).ceil() as i32;
            fb.blend_span(x0, x1, row, color);
        }
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Fill a rectangle snapped to whole pixels. Negative sizes draw nothing.
pub fn fill_rect(fb: &mut Framebuffer, rect: Rect, row_color: impl Fn(f32) -> Rgba) {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return;
    }

    let x0 = rect.x.round() as i32;
    let x1 = rect.right().round() as i32;
    let y0 = (rect.y.round() as i32).max(0);
    let y1 = (rect.bottom().round() as i32).min(fb.height() as i32);

    for row in y0..y1 {
        fb.blend_span(x0, x1, row, row_color(row as f32 + 0.5));
    }
}

/// Outline a rectangle with the stroke centered on its edges.
pub fn stroke_rect(fb: &mut Framebuffer, rect: Rect, thickness: f32, color: Rgba) {
    let t = thickness.max(1.0);
    let half = t / 2.0;
    let solid = |_: f32| color;

    // Top and bottom span the full outer width; sides fill between them.
    fill_rect(fb, Rect::new(rect.x - half, rect.y - half, rect.width + t, t), solid);
    fill_rect(fb, Rect::new(rect.x - half, rect.bottom() - half, rect.width + t, t), solid);
    if rect.height > t {
        let side_height = rect.height - t;
        fill_rect(fb, Rect::new(rect.x - half, rect.y + half, t, side_height), solid);
        fill_rect(fb, Rect::new(rect.right() - half, rect.y + half, t, side_height), solid);
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Fill a circle row by row, so translucent colors blend once per pixel.
pub fn fill_circle(fb: &mut Framebuffer, cx: f32, cy: f32, radius: f32, color: Rgba) {
    if !(radius > 0.0 && cx.is_finite() && cy.is_finite()) {
        return;
    }

    let r2 = radius * radius;
    let first_row = (cy - radius).floor() as i32;
    let last_row = (cy + radius).ceil() as i32;

    for row in first_row..=last_row {
        let dy = row as f32 + 0.5 - cy;
        if dy * dy > r2 {
            continue;
        }
        let half = (r2 - dy * dy).sqrt();
        let x0 = (cx - half - 0.5).ceil() as i32;
        let x1 = (cx + half - 0.5).ceil() as i32;
        fb.blend_span(x0, x1, row, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
