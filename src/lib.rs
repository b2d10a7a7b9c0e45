//! # Trueno-Dash
//!
//! Live dashboard charts drawn onto named 2D surfaces.
//!
//! Three chart types (line, bar, sparkline) plus a decorative hero
//! sparkline are rendered from in-memory series by a stateless
//! [`charts::ChartRenderer`]. A [`dashboard::Dashboard`] owns the series
//! and mutates them on every tick, and [`refresh::RefreshLoop`] ticks it on
//! a fixed interval to simulate a live feed.
//!
//! Surfaces are reached through the [`surface::Surface`] trait, so the same
//! renderer drives a pixel framebuffer ([`canvas::RasterSurface`]), an SVG
//! document ([`canvas::SvgSurface`]) or a command recorder
//! ([`canvas::RecordingSurface`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_dash::prelude::*;
//!
//! let config = DashboardConfig::default();
//! let mut surfaces = Surfaces::new();
//! for spec in config.surfaces.all() {
//!     surfaces.insert(spec.name.clone(), RecordingSurface::new(spec.width, spec.height));
//! }
//!
//! let mut dashboard = Dashboard::new(&config, surfaces, SeededRandom::new(42))?;
//! dashboard.render_all()?;
//! let report = dashboard.tick();
//! assert!(report.is_clean());
//! # Ok::<(), trueno_dash::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA colors and hex parsing.
pub mod color;

/// Error types.
pub mod error;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Rasterization primitives (anti-aliased lines, polygons, circles).
pub mod render;

// ============================================================================
// Surfaces
// ============================================================================

/// Drawing surface trait and name-keyed registry.
pub mod surface;

/// Surface implementations: raster, SVG, recording.
pub mod canvas;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Data
// ============================================================================

/// Fixed-length sample series.
pub mod series;

/// Injectable random source.
pub mod random;

/// Synthetic data generators.
pub mod synth;

// ============================================================================
// Dashboard
// ============================================================================

/// Line, bar, sparkline and hero chart rendering.
pub mod charts;

/// YAML configuration.
pub mod config;

/// Dashboard state and ticking.
pub mod dashboard;

/// Fixed-interval refresh loop.
pub mod refresh;

pub use error::{Error, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::canvas::{DrawCommand, RasterSurface, RecordingSurface, SvgSurface};
    pub use crate::charts::{ChartRenderer, ChartStyle, DrawOutcome};
    pub use crate::color::Rgba;
    pub use crate::config::DashboardConfig;
    pub use crate::dashboard::{Dashboard, Tick, TickReport};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Rect};
    pub use crate::random::{RandomSource, SeededRandom};
    pub use crate::refresh::{RefreshHandle, RefreshLoop};
    pub use crate::series::Series;
    pub use crate::surface::{Surface, SurfaceRegistry, Surfaces};
}
