use super::Vec2;

/// Axis-aligned rectangle in design units (top-left origin).
///
/// Stored as origin + size. Generated code usually thinks in
/// left/top/right/bottom edges; [`Rect::from_ltrb`] and the edge accessors
/// cover that form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from its four edges.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Smallest rectangle spanning both corners.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Rect::from_ltrb(min.x, min.y, max.x, max.y)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn mid_x(self) -> f32 {
        self.origin.x + self.size.x * 0.5
    }

    #[inline]
    pub fn mid_y(self) -> f32 {
        self.origin.y + self.size.y * 0.5
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.mid_x(), self.mid_y())
    }

    /// Rectangle of the given size centered on `center`.
    #[inline]
    pub fn centered_at(center: Vec2, width: f32, height: f32) -> Self {
        Rect::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        Rect::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}
