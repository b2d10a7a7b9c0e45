//! Line chart: gradient area, stroked polyline, point markers, min/max labels.

use crate::error::Result;
use crate::geometry::Point;
use crate::series::round_half_up;
use crate::surface::{LinearGradient, Paint, Path, Surface};

use super::layout::LineLayout;
use super::style::LineStyle;

/// Draw `values` onto `surface`.
///
/// The layout is computed before the surface is cleared, so a rejected
/// series leaves the surface as it was.
pub(crate) fn render(surface: &mut dyn Surface, style: &LineStyle, values: &[f32]) -> Result<()> {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let layout = LineLayout::compute(w, h, style.padding, style.domain_margin, values)?;

    surface.clear();

    let gradient = LinearGradient::vertical(0.0, h, style.gradient_top, style.gradient_bottom);
    let area = Path::polyline(&layout.area()).close();
    surface.fill_path(&area, &Paint::Linear(gradient));

    surface.stroke_path(&Path::polyline(&layout.points), style.stroke);

    for &point in &layout.points {
        surface.fill_circle(point, style.marker_radius, style.marker_color);
    }

    let p = style.padding;
    surface.fill_text(
        &format!("{}", round_half_up(layout.lo)),
        Point::new(style.label_inset, h - p + 8.0),
        &style.label,
    );
    surface.fill_text(
        &format!("{}", round_half_up(layout.hi)),
        Point::new(style.label_inset, p + 6.0),
        &style.label,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingSurface};

    #[test]
    fn test_line_command_order() {
        let mut surface = RecordingSurface::new(640, 260);
        render(&mut surface, &LineStyle::default(), &[70.0, 75.0, 80.0]).unwrap();

        let cmds = surface.commands();
        assert!(matches!(cmds[0], DrawCommand::ClearRect(_)));
        assert!(matches!(&cmds[1], DrawCommand::FillPath { path, paint: Paint::Linear(_) } if path.is_closed()));
        assert!(matches!(cmds[2], DrawCommand::StrokePath { .. }));
        let circles = cmds.iter().filter(|c| matches!(c, DrawCommand::FillCircle { .. })).count();
        assert_eq!(circles, 3);
        assert_eq!(surface.texts(), vec!["64", "86"]);
    }

    #[test]
    fn test_line_labels_positions() {
        let mut surface = RecordingSurface::new(640, 260);
        render(&mut surface, &LineStyle::default(), &[1.5, 2.5]).unwrap();

        let positions: Vec<Point> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { at, .. } => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![Point::new(6.0, 236.0), Point::new(6.0, 38.0)]);
        // Ties round up: -4.5 -> -4, 8.5 -> 9.
        assert_eq!(surface.texts(), vec!["-4", "9"]);
    }

    #[test]
    fn test_short_series_leaves_surface_untouched() {
        let mut surface = RecordingSurface::new(640, 260);
        assert!(render(&mut surface, &LineStyle::default(), &[1.0]).is_err());
        assert!(surface.commands().is_empty());
    }
}
