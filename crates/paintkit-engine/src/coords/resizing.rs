use super::{Rect, Vec2};

/// How artwork authored at one size is placed into a target frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResizingBehavior {
    /// Proportionally resized to fit entirely inside the target.
    AspectFit,
    /// Proportionally resized to cover the target completely (may overflow).
    AspectFill,
    /// Stretched to the target rectangle, ignoring aspect ratio.
    Stretch,
    /// Centered in the target without resizing.
    Center,
}

impl ResizingBehavior {
    /// Maps the artwork bounds `rect` into `target`.
    ///
    /// Returns `rect` unchanged when there is no target or when it already
    /// equals the target. The result is always centered on the target's
    /// midpoint, except for [`Stretch`](Self::Stretch) which returns the
    /// target verbatim.
    ///
    /// A source with zero width or height cannot be scaled; it maps to a
    /// zero-size rectangle at the target's midpoint (debug builds assert).
    pub fn fit(self, rect: Rect, target: Option<Rect>) -> Rect {
        let Some(target) = target else { return rect };
        if rect == target {
            return rect;
        }

        if self == ResizingBehavior::Stretch {
            return target;
        }

        debug_assert!(
            rect.width() != 0.0 && rect.height() != 0.0,
            "ResizingBehavior::fit: source rect {rect:?} has zero area"
        );
        if rect.width() == 0.0 || rect.height() == 0.0 {
            return Rect::from_origin_size(target.center(), Vec2::zero());
        }

        let x_ratio = (target.width() / rect.width()).abs();
        let y_ratio = (target.height() / rect.height()).abs();

        let scale = match self {
            ResizingBehavior::AspectFit => x_ratio.min(y_ratio),
            ResizingBehavior::AspectFill => x_ratio.max(y_ratio),
            ResizingBehavior::Center => 1.0,
            ResizingBehavior::Stretch => return target,
        };

        let width = (rect.width() * scale).abs();
        let height = (rect.height() * scale).abs();
        Rect::centered_at(target.center(), width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ResizingBehavior; 4] = [
        ResizingBehavior::AspectFit,
        ResizingBehavior::AspectFill,
        ResizingBehavior::Stretch,
        ResizingBehavior::Center,
    ];

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool { (a - b).abs() <= EPS }

    // ── identity cases ────────────────────────────────────────────────────

    #[test]
    fn same_rect_is_identity_for_every_mode() {
        let rect = Rect::new(3.0, 7.0, 120.0, 45.0);
        for mode in ALL {
            assert_eq!(mode.fit(rect, Some(rect)), rect, "{mode:?}");
        }
    }

    #[test]
    fn missing_target_is_identity() {
        let rect = Rect::new(0.0, 0.0, 10.0, 20.0);
        for mode in ALL {
            assert_eq!(mode.fit(rect, None), rect);
        }
    }

    // ── stretch ───────────────────────────────────────────────────────────

    #[test]
    fn stretch_returns_target() {
        let rect = Rect::new(0.0, 0.0, 10.0, 20.0);
        let target = Rect::new(5.0, 5.0, 300.0, 40.0);
        assert_eq!(ResizingBehavior::Stretch.fit(rect, Some(target)), target);
    }

    // ── aspect fit ────────────────────────────────────────────────────────

    #[test]
    fn aspect_fit_is_contained_and_centered() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let target = Rect::new(10.0, 10.0, 80.0, 80.0);
        let out = ResizingBehavior::AspectFit.fit(rect, Some(target));

        assert!(out.width() <= target.width() + EPS);
        assert!(out.height() <= target.height() + EPS);
        assert!(approx(out.mid_x(), target.mid_x()));
        assert!(approx(out.mid_y(), target.mid_y()));
        // Width is the limiting axis: 80 / 100 = 0.8.
        assert!(approx(out.width(), 80.0));
        assert!(approx(out.height(), 40.0));
    }

    #[test]
    fn aspect_fit_grows_small_artwork() {
        let rect = Rect::new(0.0, 0.0, 10.0, 20.0);
        let target = Rect::new(0.0, 0.0, 100.0, 100.0);
        let out = ResizingBehavior::AspectFit.fit(rect, Some(target));
        assert!(approx(out.width(), 50.0));
        assert!(approx(out.height(), 100.0));
        assert!(approx(out.left(), 25.0));
        assert!(approx(out.top(), 0.0));
    }

    // ── aspect fill ───────────────────────────────────────────────────────

    #[test]
    fn aspect_fill_covers_target() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let target = Rect::new(0.0, 0.0, 80.0, 80.0);
        let out = ResizingBehavior::AspectFill.fit(rect, Some(target));

        assert!(out.width() >= target.width() - EPS);
        assert!(out.height() >= target.height() - EPS);
        assert!(approx(out.width(), 160.0));
        assert!(approx(out.height(), 80.0));
        assert!(approx(out.mid_x(), 40.0));
        assert!(approx(out.mid_y(), 40.0));
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_keeps_size() {
        let rect = Rect::new(0.0, 0.0, 30.0, 10.0);
        let target = Rect::new(100.0, 100.0, 50.0, 50.0);
        let out = ResizingBehavior::Center.fit(rect, Some(target));
        assert_eq!(out, Rect::new(110.0, 120.0, 30.0, 10.0));
    }

    #[test]
    fn negative_target_extent_uses_magnitude() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let target = Rect::new(0.0, 0.0, -20.0, 40.0);
        let out = ResizingBehavior::AspectFit.fit(rect, Some(target));
        assert!(approx(out.width(), 20.0));
        assert!(approx(out.height(), 20.0));
    }

    // ── degenerate source ─────────────────────────────────────────────────

    #[test]
    #[cfg(not(debug_assertions))]
    fn zero_area_source_collapses_to_target_center() {
        let rect = Rect::new(0.0, 0.0, 0.0, 10.0);
        let target = Rect::new(0.0, 0.0, 40.0, 20.0);
        let out = ResizingBehavior::AspectFit.fit(rect, Some(target));
        assert_eq!(out, Rect::new(20.0, 10.0, 0.0, 0.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero area")]
    fn zero_area_source_asserts_in_debug() {
        let rect = Rect::new(0.0, 0.0, 0.0, 10.0);
        let target = Rect::new(0.0, 0.0, 40.0, 20.0);
        ResizingBehavior::AspectFit.fit(rect, Some(target));
    }
}
