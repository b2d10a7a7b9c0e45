//! Pure chart geometry.
//!
//! Layouts map samples to surface coordinates without touching a surface,
//! so every coordinate the renderer emits can be checked on its own.

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::series::extent;

/// Minimum samples a line or sparkline needs.
pub const MIN_LINE_SAMPLES: usize = 2;

/// Point positions for a line-style chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// Plot area: the surface bounds inset by the padding.
    pub plot: Rect,
    /// Bottom of the value domain (minimum minus margin).
    pub lo: f32,
    /// Top of the value domain (maximum plus margin).
    pub hi: f32,
    /// One point per sample.
    pub points: Vec<Point>,
}

impl LineLayout {
    /// Lay out `values` on a `width` x `height` surface.
    ///
    /// Samples are spread evenly from the left to the right edge of the plot
    /// area. The domain is `[min - margin, max + margin]` and maps onto the
    /// plot area with larger values higher up. A zero or non-finite domain
    /// range (and any non-finite sample) lands on the vertical midpoint.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientData`] if `values` has fewer than two samples.
    pub fn compute(width: f32, height: f32, padding: f32, margin: f32, values: &[f32]) -> Result<Self> {
        if values.len() < MIN_LINE_SAMPLES {
            return Err(Error::InsufficientData { required: MIN_LINE_SAMPLES, actual: values.len() });
        }

        let plot = Rect::new(0.0, 0.0, width, height).inset(padding);
        let (min, max) = extent(values).unwrap_or((0.0, 0.0));
        let lo = min - margin;
        let hi = max + margin;
        let range = hi - lo;
        let degenerate = !(range.is_finite() && range > 0.0);

        let step = plot.width / (values.len() - 1) as f32;
        let mid = plot.y + plot.height / 2.0;

        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = plot.x + i as f32 * step;
                let y = if degenerate || !v.is_finite() {
                    mid
                } else {
                    let t = (v - lo) / range;
                    (plot.y + (1.0 - t) * plot.height).clamp(plot.y, plot.bottom())
                };
                Point::new(x, y)
            })
            .collect();

        Ok(Self { plot, lo, hi, points })
    }

    /// Closed area outline: bottom-left of the plot, every point, bottom-right.
    #[must_use]
    pub fn area(&self) -> Vec<Point> {
        let bottom = self.plot.bottom();
        let mut outline = Vec::with_capacity(self.points.len() + 2);
        outline.push(Point::new(self.plot.x, bottom));
        outline.extend_from_slice(&self.points);
        outline.push(Point::new(self.plot.right(), bottom));
        outline
    }
}

/// Bar positions for a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    /// Plot area: the surface bounds inset by the padding.
    pub plot: Rect,
    /// Width shared by every bar.
    pub bar_width: f32,
    /// One rectangle per sample, bottom-aligned to the plot area.
    pub bars: Vec<Rect>,
}

impl BarLayout {
    /// Lay out `values` as bars separated by `gap`.
    ///
    /// Heights scale by `max + headroom`. Each height is clamped to the plot
    /// height, and a non-positive scale gives zero height. Bars never get
    /// narrower than `min_bar_width`.
    #[must_use]
    pub fn compute(
        width: f32,
        height: f32,
        padding: f32,
        gap: f32,
        headroom: f32,
        min_bar_width: f32,
        values: &[f32],
    ) -> Self {
        let plot = Rect::new(0.0, 0.0, width, height).inset(padding);
        if values.is_empty() {
            return Self { plot, bar_width: min_bar_width, bars: Vec::new() };
        }

        let n = values.len() as f32;
        let raw = plot.width / n - gap;
        let bar_width = if raw.is_finite() { raw.max(min_bar_width) } else { min_bar_width };

        let max = extent(values).map_or(0.0, |(_, hi)| hi);
        let scale = max + headroom;

        let bars = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let h = if scale > 0.0 && v.is_finite() {
                    (v / scale * plot.height).clamp(0.0, plot.height)
                } else {
                    0.0
                };
                let x = plot.x + i as f32 * (bar_width + gap);
                Rect::new(x, plot.bottom() - h, bar_width, h)
            })
            .collect();

        Self { plot, bar_width, bars }
    }
}

/// Label for bar `index`: the provided label, or `f{index}` when it is
/// missing or empty.
#[must_use]
pub fn bar_label(labels: &[String], index: usize) -> String {
    match labels.get(index) {
        Some(label) if !label.is_empty() => label.clone(),
        _ => format!("f{index}"),
    }
}
