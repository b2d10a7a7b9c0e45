//! Rasterization of surface primitives onto a framebuffer.
//!
//! # Algorithms
//!
//! - **Wu's Anti-aliased Line**: hairline strokes with sub-pixel accuracy
//! - **Scanline Polygon Fill**: even-odd fill sampled at pixel centers, one
//!   color per row so vertical gradients come for free
//! - **Row-span Circles**: filled circles that blend each pixel once
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod primitives;

pub use primitives::{
    draw_line_aa, draw_polyline, draw_thick_line, fill_circle, fill_polygon, fill_rect,
    stroke_rect,
};
