//! Decorative hero sparkline with a glow pass.

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::random::RandomSource;
use crate::surface::{Path, Surface};

use super::layout::MIN_LINE_SAMPLES;
use super::style::HeroStyle;

/// `count` points spread evenly across `width`, each `y` in `[0.3h, 0.9h)`.
pub fn hero_points(width: f32, height: f32, count: usize, rng: &mut impl RandomSource) -> Vec<Point> {
    let denom = count.saturating_sub(1).max(1) as f32;
    (0..count)
        .map(|i| {
            let x = i as f32 / denom * width;
            let y = height * (0.3 + rng.next_f32() * 0.6);
            Point::new(x, y)
        })
        .collect()
}

pub(crate) fn render(surface: &mut dyn Surface, style: &HeroStyle, points: &[Point]) -> Result<()> {
    if points.len() < MIN_LINE_SAMPLES {
        return Err(Error::InsufficientData { required: MIN_LINE_SAMPLES, actual: points.len() });
    }

    let path = Path::polyline(points);
    surface.clear();
    surface.stroke_path(&path, style.stroke);
    surface.stroke_path(&path, style.glow);
    Ok(())
}
