use std::fmt;
use std::sync::Arc;

use crate::coords::Vec2;

use super::shader::{ColorStop, LinearGradient, RadialGradient, Shader, SpreadMode};
use super::Color;

/// Error returned by [`Gradient::with_positions`].
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// Colors and positions must pair up by index.
    LengthMismatch { colors: usize, positions: usize },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::LengthMismatch { colors, positions } => write!(
                f,
                "gradient has {colors} colors but {positions} positions"
            ),
        }
    }
}

impl std::error::Error for GradientError {}

/// Immutable color ramp: colors paired by index with positions in `[0, 1]`.
///
/// Storage is shared, so cloning a gradient (for example into a cache key)
/// does not copy the ramp. Equality is structural: two gradients are equal
/// when their colors and positions are element-wise equal, in order.
///
/// Positions are assumed non-decreasing. This is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Arc<[Color]>,
    positions: Arc<[f32]>,
}

impl Gradient {
    /// Creates a ramp with evenly spaced positions `i / (n - 1)`.
    ///
    /// A single color sits at position `0`.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        let colors: Vec<Color> = colors.into();
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let positions: Vec<f32> = (0..colors.len()).map(|i| i as f32 / last).collect();
        Self {
            colors: colors.into(),
            positions: positions.into(),
        }
    }

    /// Creates a ramp with explicit positions.
    pub fn with_positions(
        colors: impl Into<Vec<Color>>,
        positions: impl Into<Vec<f32>>,
    ) -> Result<Self, GradientError> {
        let colors: Vec<Color> = colors.into();
        let positions: Vec<f32> = positions.into();
        if colors.len() != positions.len() {
            return Err(GradientError::LengthMismatch {
                colors: colors.len(),
                positions: positions.len(),
            });
        }
        Ok(Self {
            colors: colors.into(),
            positions: positions.into(),
        })
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The ramp as color stops, in order.
    pub fn stops(&self) -> Vec<ColorStop> {
        self.colors
            .iter()
            .zip(self.positions.iter())
            .map(|(&color, &t)| ColorStop::new(t, color))
            .collect()
    }

    /// The same ramp traversed from the other end.
    pub fn reversed(&self) -> Gradient {
        let colors: Vec<Color> = self.colors.iter().rev().copied().collect();
        let positions: Vec<f32> = self.positions.iter().rev().map(|p| 1.0 - p).collect();
        Self {
            colors: colors.into(),
            positions: positions.into(),
        }
    }

    /// Linear gradient from `start` to `end`, clamped beyond the ramp ends.
    pub fn linear(&self, start: Vec2, end: Vec2) -> Shader {
        Shader::Linear(LinearGradient::new(start, end, self.stops(), SpreadMode::Pad))
    }

    /// Two-circle radial gradient.
    ///
    /// The backend primitive is a single circle growing from its center, so
    /// the ramp is anchored on the larger circle and compressed into
    /// `[ratio, 1]`, where `ratio` is smaller radius / larger radius. The
    /// visible ramp then starts at the smaller circle's edge and ends at the
    /// larger circle's edge.
    ///
    /// - `start_radius > end_radius`: centered on `end_center` with radius
    ///   `start_radius`; colors are reversed and positions mirrored.
    /// - otherwise: centered on `start_center` with radius `end_radius`.
    ///
    /// Equal radii put every stop at `1.0`; see
    /// [`RadialGradient::flat_color`].
    pub fn radial(
        &self,
        start_center: Vec2,
        start_radius: f32,
        end_center: Vec2,
        end_radius: f32,
    ) -> Shader {
        if start_radius > end_radius {
            let ratio = end_radius / start_radius;
            let stops = self
                .colors
                .iter()
                .zip(self.positions.iter())
                .rev()
                .map(|(&color, &p)| ColorStop::new(compress(1.0 - p, ratio), color))
                .collect();
            Shader::Radial(RadialGradient::new(end_center, start_radius, stops, SpreadMode::Pad))
        } else {
            // Both radii zero: nothing to compress into, treat as equal radii.
            let ratio = if end_radius == 0.0 { 1.0 } else { start_radius / end_radius };
            let stops = self
                .colors
                .iter()
                .zip(self.positions.iter())
                .map(|(&color, &p)| ColorStop::new(compress(p, ratio), color))
                .collect();
            Shader::Radial(RadialGradient::new(start_center, end_radius, stops, SpreadMode::Pad))
        }
    }
}

/// Maps `p` in `[0, 1]` onto `[ratio, 1]`.
#[inline]
fn compress(p: f32, ratio: f32) -> f32 {
    p * (1.0 - ratio) + ratio
}
