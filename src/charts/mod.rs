//! Chart rendering onto named surfaces.
//!
//! [`ChartRenderer`] holds only styling. Each draw call looks its surface up
//! in a [`SurfaceRegistry`]; an unregistered name is skipped with no side
//! effects. A registered surface is cleared and redrawn from scratch.
//!
//! # Example
//!
//! ```
//! use trueno_dash::canvas::RecordingSurface;
//! use trueno_dash::charts::{ChartRenderer, DrawOutcome};
//! use trueno_dash::surface::Surfaces;
//!
//! let mut surfaces = Surfaces::new().with("sparkChart", RecordingSurface::new(320, 64));
//! let renderer = ChartRenderer::default();
//!
//! let drawn = renderer.draw_sparkline(&mut surfaces, "sparkChart", &[3.0, 1.0, 4.0]).unwrap();
//! assert_eq!(drawn, DrawOutcome::Drawn);
//!
//! let skipped = renderer.draw_sparkline(&mut surfaces, "nope", &[3.0, 1.0, 4.0]).unwrap();
//! assert_eq!(skipped, DrawOutcome::Skipped);
//! ```

mod bar;
mod hero;
mod layout;
mod line;
mod sparkline;
mod style;

use log::debug;

use crate::error::Result;
use crate::geometry::Point;
use crate::surface::SurfaceRegistry;

pub use hero::hero_points;
pub use layout::{bar_label, BarLayout, LineLayout, MIN_LINE_SAMPLES};
pub use style::{BarStyle, ChartStyle, HeroStyle, LineStyle, SparkStyle};

/// What a draw call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The surface was cleared and redrawn.
    Drawn,
    /// No surface is registered under the requested name.
    Skipped,
}

impl DrawOutcome {
    /// True if the chart was drawn.
    #[must_use]
    pub fn is_drawn(self) -> bool {
        self == Self::Drawn
    }
}

/// Draws line, bar, sparkline and hero charts.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
}

impl ChartRenderer {
    /// Create a renderer with the given styling.
    #[must_use]
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Current styling.
    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Draw a line chart of `series` onto surface `name`.
    ///
    /// `timestamps` travel with the series but are not drawn.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InsufficientData`] if `series` has fewer than two
    /// samples; the surface is left untouched.
    pub fn draw_line_chart<R>(&self, surfaces: &mut R, name: &str, series: &[f32], timestamps: &[i64]) -> Result<DrawOutcome>
    where
        R: SurfaceRegistry + ?Sized,
    {
        let _ = timestamps;
        let Some(surface) = surfaces.surface_mut(name) else {
            return Ok(skipped(name));
        };
        line::render(surface, &self.style.line, series)?;
        Ok(DrawOutcome::Drawn)
    }

    /// Draw a bar chart of `series` onto surface `name`.
    ///
    /// Missing or empty labels fall back to `f{index}`; extra labels are
    /// ignored. An empty series clears the surface and draws nothing else.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` keeps the signature uniform.
    pub fn draw_bar_chart<R>(&self, surfaces: &mut R, name: &str, series: &[f32], labels: &[String]) -> Result<DrawOutcome>
    where
        R: SurfaceRegistry + ?Sized,
    {
        let Some(surface) = surfaces.surface_mut(name) else {
            return Ok(skipped(name));
        };
        bar::render(surface, &self.style.bar, series, labels);
        Ok(DrawOutcome::Drawn)
    }

    /// Draw a sparkline of `series` onto surface `name`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InsufficientData`] if `series` has fewer than two
    /// samples.
    pub fn draw_sparkline<R>(&self, surfaces: &mut R, name: &str, series: &[f32]) -> Result<DrawOutcome>
    where
        R: SurfaceRegistry + ?Sized,
    {
        let Some(surface) = surfaces.surface_mut(name) else {
            return Ok(skipped(name));
        };
        sparkline::render(surface, &self.style.spark, series)?;
        Ok(DrawOutcome::Drawn)
    }

    /// Stroke `points` onto surface `name`, then stroke them again with the
    /// glow style.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InsufficientData`] for fewer than two points.
    pub fn draw_hero_spark<R>(&self, surfaces: &mut R, name: &str, points: &[Point]) -> Result<DrawOutcome>
    where
        R: SurfaceRegistry + ?Sized,
    {
        let Some(surface) = surfaces.surface_mut(name) else {
            return Ok(skipped(name));
        };
        hero::render(surface, &self.style.hero, points)?;
        Ok(DrawOutcome::Drawn)
    }
}

fn skipped(name: &str) -> DrawOutcome {
    debug!("surface '{name}' is not registered, skipping");
    DrawOutcome::Skipped
}
