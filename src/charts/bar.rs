//! Bar chart: translucent filled bars with an outline and a label below each.

use crate::geometry::Point;
use crate::surface::{Paint, Surface};

use super::layout::{bar_label, BarLayout};
use super::style::BarStyle;

pub(crate) fn render(surface: &mut dyn Surface, style: &BarStyle, values: &[f32], labels: &[String]) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let layout =
        BarLayout::compute(w, h, style.padding, style.gap, style.headroom, style.min_bar_width, values);

    surface.clear();

    let fill = Paint::Solid(style.fill);
    let label_y = h - style.padding + style.label_offset;
    for (i, &bar) in layout.bars.iter().enumerate() {
        surface.fill_rect(bar, &fill);
        surface.stroke_rect(bar, style.outline);
        surface.fill_text(&bar_label(labels, i), Point::new(bar.x, label_y), &style.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingSurface};

    #[test]
    fn test_bar_commands_per_bar() {
        let mut surface = RecordingSurface::new(640, 260);
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        render(&mut surface, &BarStyle::default(), &[1.0, 2.0, 3.0], &labels);

        let cmds = surface.commands();
        assert_eq!(cmds.len(), 1 + 3 * 3);
        assert!(matches!(cmds[1], DrawCommand::FillRect { .. }));
        assert!(matches!(cmds[2], DrawCommand::StrokeRect { .. }));
        assert!(matches!(cmds[3], DrawCommand::FillText { .. }));
        assert_eq!(surface.texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_short_label_list_falls_back() {
        let mut surface = RecordingSurface::new(640, 260);
        let labels = vec!["only".to_string()];
        render(&mut surface, &BarStyle::default(), &[4.0, 5.0, 6.0], &labels);

        let texts = surface.texts();
        assert_eq!(texts, vec!["only", "f1", "f2"]);
        assert!(texts.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_empty_series_only_clears() {
        let mut surface = RecordingSurface::new(640, 260);
        render(&mut surface, &BarStyle::default(), &[], &[]);
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn test_label_baseline() {
        let mut surface = RecordingSurface::new(640, 260);
        render(&mut surface, &BarStyle::default(), &[1.0], &[]);
        let at = surface.commands().iter().find_map(|c| match c {
            DrawCommand::FillText { at, .. } => Some(*at),
            _ => None,
        });
        assert_eq!(at, Some(Point::new(32.0, 242.0)));
    }
}
