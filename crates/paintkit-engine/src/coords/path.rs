use super::{CornerRadii, Rect, Vec2};

/// Cubic Bézier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// A single path segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { control1: Vec2, control2: Vec2, end: Vec2 },
    Close,
}

/// Minimal vector path in design units.
///
/// Backends translate the commands into their native path type. Only the
/// segment kinds generated code needs are represented.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Vec2::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Vec2::new(x, y)));
        self
    }

    pub fn cubic_to(mut self, c1: Vec2, c2: Vec2, end: Vec2) -> Self {
        self.commands.push(PathCommand::CubicTo { control1: c1, control2: c2, end });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Open two-point polyline.
    pub fn line(from: Vec2, to: Vec2) -> Self {
        Self::new().move_to(from.x, from.y).line_to(to.x, to.y)
    }

    /// Closed rounded rectangle, clockwise from the top-left corner.
    ///
    /// Radii are clamped to half the shorter side. Corners with a zero
    /// radius are sharp.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let radii = radii.clamped(rect.width().abs().min(rect.height().abs()) * 0.5);
        let CornerRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } = radii;
        let k = 1.0 - KAPPA;

        let mut path = Self::new().move_to(l + tl, t).line_to(r - tr, t);
        if tr > 0.0 {
            path = path.cubic_to(
                Vec2::new(r - tr * k, t),
                Vec2::new(r, t + tr * k),
                Vec2::new(r, t + tr),
            );
        }

        path = path.line_to(r, b - br);
        if br > 0.0 {
            path = path.cubic_to(
                Vec2::new(r, b - br * k),
                Vec2::new(r - br * k, b),
                Vec2::new(r - br, b),
            );
        }

        path = path.line_to(l + bl, b);
        if bl > 0.0 {
            path = path.cubic_to(
                Vec2::new(l + bl * k, b),
                Vec2::new(l, b - bl * k),
                Vec2::new(l, b - bl),
            );
        }

        path = path.line_to(l, t + tl);
        if tl > 0.0 {
            path = path.cubic_to(
                Vec2::new(l, t + tl * k),
                Vec2::new(l + tl * k, t),
                Vec2::new(l + tl, t),
            );
        }

        path.close()
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounds of all points, control points included.
    pub fn bounds(&self) -> Rect {
        let mut points = self.commands.iter().flat_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None, None],
            PathCommand::CubicTo { control1, control2, end } => {
                [Some(control1), Some(control2), Some(end)]
            }
            PathCommand::Close => [None, None, None],
        })
        .flatten();

        let Some(first) = points.next() else { return Rect::default() };
        let (min, max) = points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Rect::from_points(min, max)
    }
}
