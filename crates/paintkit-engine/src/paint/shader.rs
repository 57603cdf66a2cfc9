use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

use super::Color;

/// Gradient behavior outside the `[0, 1]` ramp range.
///
/// Generated gradients always clamp to their edge stops.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SpreadMode {
    /// Clamp to the edge stops.
    #[default]
    Pad,
}

impl SpreadMode {
    /// Maps an unbounded ramp parameter into `[0, 1]`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in `[0, 1]` and stops are expected in non-decreasing `t`
/// order. Neither is enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient descriptor.
///
/// The ramp runs from `start` (`t = 0`) to `end` (`t = 1`) in the same
/// coordinate space as the geometry it fills.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Returns true when the descriptor is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && !self.stops.is_empty()
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Evaluates the ramp at parameter `t` (spread applied first).
    pub fn sample(&self, t: f32) -> Color {
        sample_stops(&self.stops, self.spread.apply(t))
    }

    /// Evaluates the gradient at a point by projecting it onto the axis.
    pub fn sample_at(&self, p: Vec2) -> Color {
        let axis = self.end - self.start;
        let len2 = axis.x * axis.x + axis.y * axis.y;
        if len2 <= 0.0 {
            return self.sample(0.0);
        }
        let rel = p - self.start;
        self.sample((rel.x * axis.x + rel.y * axis.y) / len2)
    }
}

/// Radial gradient descriptor: concentric ramp around `center`.
///
/// `t = 0` is the center and `t = 1` is the circle of `radius`. Two-circle
/// gradients are expressed by compressing the stops into a sub-range; see
/// [`Gradient::radial`](super::Gradient::radial).
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            center,
            radius,
            stops,
            spread,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius >= 0.0
            && self.stops.iter().all(|s| s.t.is_finite())
            && !self.stops.is_empty()
    }

    /// Color to fill with when the ramp has collapsed onto a single position.
    ///
    /// This happens for two-circle gradients whose circles share a radius:
    /// every stop lands on `t = 1` and the result is a flat fill of the
    /// ramp's last color.
    pub fn flat_color(&self) -> Option<Color> {
        let last = self.stops.last()?;
        self.stops.iter().all(|s| s.t == last.t).then_some(last.color)
    }

    /// Evaluates the ramp at parameter `t` (spread applied first).
    pub fn sample(&self, t: f32) -> Color {
        if let Some(flat) = self.flat_color() {
            return flat;
        }
        sample_stops(&self.stops, self.spread.apply(t))
    }

    /// Evaluates the gradient at a point by its distance from the center.
    pub fn sample_at(&self, p: Vec2) -> Color {
        if self.radius <= 0.0 {
            return self.sample(1.0);
        }
        self.sample(self.center.distance(p) / self.radius)
    }
}

/// Shader descriptor handed to a [`ShaderFactory`](crate::render::ShaderFactory).
#[derive(Debug, Clone, PartialEq)]
pub enum Shader {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Shader {
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Shader::Linear(g) => &g.stops,
            Shader::Radial(g) => &g.stops,
        }
    }

    /// Returns true when the descriptor can be turned into a backend shader:
    /// finite geometry, at least one stop, and a non-degenerate axis or radius.
    pub fn is_valid(&self) -> bool {
        match self {
            Shader::Linear(g) => g.is_valid(),
            Shader::Radial(g) => g.is_valid(),
        }
    }

    #[inline]
    pub fn spread(&self) -> SpreadMode {
        match self {
            Shader::Linear(g) => g.spread,
            Shader::Radial(g) => g.spread,
        }
    }

    /// True when every stop is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.stops().iter().all(|s| s.color.is_opaque())
    }

    /// Stops packed for GPU upload (premultiplied color, 16-byte aligned).
    pub fn gpu_stops(&self) -> Vec<GpuColorStop> {
        self.stops()
            .iter()
            .map(|s| GpuColorStop {
                color: s.color.to_premul_f32(),
                offset: s.t,
                _pad: [0.0; 3],
            })
            .collect()
    }
}

/// GPU layout of a single stop.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuColorStop {
    pub color: [f32; 4], // premultiplied
    pub offset: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::TRANSPARENT;
    };
    if t <= first.t {
        return first.color;
    }
    if t >= last.t {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.t && t < b.t {
            let span = b.t - a.t;
            if span <= 0.0 {
                return b.color;
            }
            return a.color.blend((t - a.t) / span, b.color);
        }
    }
    last.color
}
