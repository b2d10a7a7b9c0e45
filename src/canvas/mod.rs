//! [`Surface`](crate::surface::Surface) implementations.
//!
//! - [`RasterSurface`]: pixels in a [`Framebuffer`](crate::framebuffer::Framebuffer),
//!   exportable as PNG
//! - [`SvgSurface`]: vector elements, rendered to an SVG document
//! - [`RecordingSurface`]: the raw command stream, for tests and for hosts
//!   that replay commands onto a real canvas

mod raster;
mod recording;
mod svg;

pub use raster::{RasterSurface, TextRun};
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::{SvgElement, SvgSurface};
