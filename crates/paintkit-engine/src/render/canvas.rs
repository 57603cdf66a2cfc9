use crate::coords::{CornerRadii, Path, Rect, Vec2};
use crate::paint::{Paint, Shader};
use crate::text::{TextAlign, TextPaint};

/// Drawing surface.
///
/// `Shader` is the backend's handle type for gradient fills, the same type a
/// matching [`ShaderFactory`] hands out.
pub trait Canvas {
    type Shader;

    fn fill_path(&mut self, path: &Path, paint: &Paint<Self::Shader>);

    /// Draws `text` along `path`, shifted by `offset`, aligned per `align`.
    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &Path,
        offset: Vec2,
        paint: &TextPaint,
        align: TextAlign,
    );

    fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, paint: &Paint<Self::Shader>) {
        self.fill_path(&Path::rounded_rect(rect, radii), paint);
    }
}

/// Creates and destroys backend shader objects.
///
/// Handles are owned by whoever created them; every handle is passed back to
/// `release_shader` exactly once.
pub trait ShaderFactory {
    type Handle;

    fn create_shader(&mut self, shader: &Shader) -> Self::Handle;

    fn release_shader(&mut self, handle: Self::Handle);
}

/// Measures text ink bounds.
///
/// Bounds are relative to the start of the baseline, +Y down.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, paint: &TextPaint) -> Rect;
}
