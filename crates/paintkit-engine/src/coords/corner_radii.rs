/// Per-corner radii for a rounded rectangle.
///
/// Corner order is clockwise from the top-left: top-left, top-right,
/// bottom-right, bottom-left. A zero radius produces a sharp corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Builds radii from the eight-value `[x, y]`-per-corner layout design
    /// tools export (`[tl_x, tl_y, tr_x, tr_y, br_x, br_y, bl_x, bl_y]`).
    ///
    /// Only the x component of each pair is used; elliptical corners are not
    /// supported.
    #[inline]
    pub const fn from_xy_pairs(radii: [f32; 8]) -> Self {
        Self::new(radii[0], radii[2], radii[4], radii[6])
    }

    /// Returns radii with each corner clamped to `[0, max]`.
    #[inline]
    pub fn clamped(self, max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            top_left: self.top_left.clamp(0.0, max),
            top_right: self.top_right.clamp(0.0, max),
            bottom_right: self.bottom_right.clamp(0.0, max),
            bottom_left: self.bottom_left.clamp(0.0, max),
        }
    }
}
