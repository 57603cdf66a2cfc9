use paintkit_engine::cache::{LinearGradientCache, RadialGradientCache, TextLayoutCache};
use paintkit_engine::coords::{CornerRadii, Rect, ResizingBehavior, Vec2};
use paintkit_engine::paint::{Color, Gradient, Paint};
use paintkit_engine::render::{Canvas, ShaderFactory, TextMeasure};
use paintkit_engine::text::{TextAlign, TextPaint};

/// Size the badge artwork was authored at.
const ARTBOARD: Rect = Rect::new(0.0, 0.0, 120.0, 40.0);

/// A rounded badge with a vertical fill, a soft top glow and a centered
/// label, drawn the way exported drawing code drives the engine.
pub struct BadgeDrawing<H> {
    fill: LinearGradientCache<H>,
    glow: RadialGradientCache<H>,
    label: TextLayoutCache,
    base: Color,
}

impl<H: Clone> BadgeDrawing<H> {
    pub fn new(base: Color) -> Self {
        Self {
            fill: LinearGradientCache::new(),
            glow: RadialGradientCache::new(),
            label: TextLayoutCache::new(),
            base,
        }
    }

    pub fn draw<B, M>(
        &mut self,
        backend: &mut B,
        measure: &M,
        target: Rect,
        resizing: ResizingBehavior,
        text: &str,
        paint: &TextPaint,
    ) where
        B: Canvas<Shader = H> + ShaderFactory<Handle = H>,
        M: TextMeasure + ?Sized,
    {
        let frame = resizing.fit(ARTBOARD, Some(target));
        let scale = frame.height() / ARTBOARD.height();
        let radii = CornerRadii::all(8.0 * scale);

        let ramp = Gradient::new([self.base.highlight(0.25), self.base, self.base.shadow(0.2)]);
        let fill = self
            .fill
            .get(
                backend,
                &ramp,
                Vec2::new(frame.mid_x(), frame.top()),
                Vec2::new(frame.mid_x(), frame.bottom()),
            )
            .clone();
        backend.fill_rounded_rect(frame, radii, &Paint::Shader(fill));

        let glow_center = Vec2::new(frame.mid_x(), frame.top() + 6.0 * scale);
        let glow_ramp = Gradient::new([Color::WHITE.with_alpha(96), Color::WHITE.with_alpha(0)]);
        let glow = self
            .glow
            .get(backend, &glow_ramp, glow_center, 0.0, glow_center, frame.width() * 0.5)
            .clone();
        backend.fill_rounded_rect(frame, radii, &Paint::Shader(glow));

        let layout = self.label.get(measure, text, paint, frame.width(), TextAlign::Center);
        let top = frame.mid_y() - layout.height() * 0.5;
        layout.draw_at(backend, Vec2::new(frame.left(), top));
    }

    /// Rebuild counts for the fill, glow and label caches.
    pub fn builds(&self) -> (u64, u64, u64) {
        (self.fill.builds(), self.glow.builds(), self.label.builds())
    }

    pub fn release<F>(&mut self, factory: &mut F)
    where
        F: ShaderFactory<Handle = H> + ?Sized,
    {
        self.fill.release(factory);
        self.glow.release(factory);
        self.label.clear();
    }
}
