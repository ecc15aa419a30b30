//! Geometry primitives and the render-sink interface for Tessera.
//!
//! Tessera does not rasterize anything itself. Widgets describe what to draw
//! through a [`RenderContext`], which forwards target-space primitives to a
//! [`RenderSink`] supplied by the host.

pub mod context;
pub mod image;
pub mod sink;
pub mod transform;
pub mod types;

pub use context::RenderContext;
pub use image::{Image, ImageId, ImageScaleMode, Wallpaper};
pub use sink::{DrawCommand, RecordingSink, RenderSink};
pub use transform::Transform2D;
pub use types::{Color, Point, Rect, Size};
