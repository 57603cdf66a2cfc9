//! Geometry types used by generated drawing code.
//!
//! Coordinate space:
//! - design-tool units (the same units the artwork was authored in)
//! - origin top-left
//! - +X right, +Y down
//!
//! Backends map these units to device pixels; nothing here is DPI-aware.

mod corner_radii;
mod path;
mod rect;
mod resizing;
mod vec2;

pub use corner_radii::CornerRadii;
pub use path::{Path, PathCommand};
pub use rect::Rect;
pub use resizing::ResizingBehavior;
pub use vec2::Vec2;
