//! Visual constants for each chart type.

use crate::color::Rgba;
use crate::surface::{Stroke, TextStyle};

/// Line chart styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Inset of the plot area from every edge.
    pub padding: f32,
    /// Added below the minimum and above the maximum of the value domain.
    pub domain_margin: f32,
    /// Area fill color at the top of the surface.
    pub gradient_top: Rgba,
    /// Area fill color at the bottom of the surface.
    pub gradient_bottom: Rgba,
    /// Polyline stroke.
    pub stroke: Stroke,
    /// Marker radius.
    pub marker_radius: f32,
    /// Marker fill.
    pub marker_color: Rgba,
    /// Min/max label style.
    pub label: TextStyle,
    /// Distance of the min/max labels from the left edge.
    pub label_inset: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            padding: 32.0,
            domain_margin: 6.0,
            gradient_top: Rgba::VIOLET.with_opacity(0.14),
            gradient_bottom: Rgba::TEAL.with_opacity(0.02),
            stroke: Stroke::new(Rgba::NEON_CYAN, 2.6),
            marker_radius: 3.0,
            marker_color: Rgba::WHITE,
            label: TextStyle::new(Rgba::WHITE.with_opacity(0.12), 11.0),
            label_inset: 6.0,
        }
    }
}

/// Bar chart styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    /// Inset of the plot area from every edge.
    pub padding: f32,
    /// Horizontal gap after each bar.
    pub gap: f32,
    /// Bars are never narrower than this.
    pub min_bar_width: f32,
    /// Added to the maximum before scaling bar heights.
    pub headroom: f32,
    /// Bar fill.
    pub fill: Rgba,
    /// Bar outline.
    pub outline: Stroke,
    /// Label style.
    pub label: TextStyle,
    /// Label baseline distance below the plot area.
    pub label_offset: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            padding: 32.0,
            gap: 12.0,
            min_bar_width: 1.0,
            headroom: 6.0,
            fill: Rgba::VIOLET.with_opacity(0.12),
            outline: Stroke::new(Rgba::NEON_CYAN, 2.0),
            label: TextStyle::new(Rgba::PALE_BLUE, 11.0),
            label_offset: 14.0,
        }
    }
}

/// Sparkline styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkStyle {
    /// Inset of the plot area from every edge.
    pub padding: f32,
    /// Polyline stroke.
    pub stroke: Stroke,
}

impl Default for SparkStyle {
    fn default() -> Self {
        Self { padding: 6.0, stroke: Stroke::new(Rgba::NEON_PINK, 1.8) }
    }
}

/// Hero sparkline styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStyle {
    /// Primary stroke.
    pub stroke: Stroke,
    /// Wide translucent pass drawn over the primary stroke.
    pub glow: Stroke,
}

impl Default for HeroStyle {
    fn default() -> Self {
        Self {
            stroke: Stroke::new(Rgba::NEON_CYAN, 2.2),
            glow: Stroke::new(Rgba::NEON_PINK.with_opacity(0.08), 6.0),
        }
    }
}

/// Styling for every chart the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartStyle {
    /// Line chart.
    pub line: LineStyle,
    /// Bar chart.
    pub bar: BarStyle,
    /// Sparkline.
    pub spark: SparkStyle,
    /// Hero sparkline.
    pub hero: HeroStyle,
}
