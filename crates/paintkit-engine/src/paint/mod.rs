//! Paint model: colors, gradient ramps and shader descriptors.
//!
//! Scope:
//! - 8-bit straight-alpha color and blend helpers
//! - gradient ramps and the shader descriptors they produce
//! - fill sources handed to a [`Canvas`](crate::render::Canvas)
//!
//! Geometry types remain in `coords`.

mod blend;
pub mod color;
pub mod gradient;
pub mod shader;

pub use color::Color;
pub use gradient::{Gradient, GradientError};
pub use shader::{ColorStop, GpuColorStop, LinearGradient, RadialGradient, Shader, SpreadMode};

/// Fill source for geometry.
///
/// `S` is the backend's shader handle type, obtained from a
/// [`ShaderFactory`](crate::render::ShaderFactory) (usually through one of
/// the gradient caches).
#[derive(Debug, Clone, PartialEq)]
pub enum Paint<S> {
    Solid(Color),
    Shader(S),
}

impl<S> Paint<S> {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl<S> From<Color> for Paint<S> {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
