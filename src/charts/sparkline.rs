//! Sparkline: one stroked polyline, no fill or decorations.

use crate::error::Result;
use crate::surface::{Path, Surface};

use super::layout::LineLayout;
use super::style::SparkStyle;

pub(crate) fn render(surface: &mut dyn Surface, style: &SparkStyle, values: &[f32]) -> Result<()> {
    let layout = LineLayout::compute(
        surface.width() as f32,
        surface.height() as f32,
        style.padding,
        0.0,
        values,
    )?;

    surface.clear();
    surface.stroke_path(&Path::polyline(&layout.points), style.stroke);
    Ok(())
}
