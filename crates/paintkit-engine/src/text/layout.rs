use std::sync::Arc;

use crate::coords::{Path, Rect, Vec2};
use crate::paint::Color;
use crate::render::{Canvas, TextMeasure};

use super::Typeface;

/// Glyphs measured to find the full ascent and descent of a face.
const REFERENCE_GLYPHS: &str = "A,";

/// Horizontal alignment of text along its baseline.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font, size and color used to set a run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    /// `None` lets the backend use its default face.
    pub typeface: Option<Arc<Typeface>>,
    pub size: f32,
    pub color: Color,
}

impl TextPaint {
    pub fn new(size: f32, color: Color) -> Self {
        Self { typeface: None, size, color }
    }

    pub fn with_typeface(mut self, typeface: Arc<Typeface>) -> Self {
        self.typeface = Some(typeface);
        self
    }
}

/// Single-line text placed on a horizontal baseline.
///
/// Built from the text's ink bounds and the bounds of a reference string
/// that reaches the face's full ascent and descent, so lines of different
/// text share a baseline. The baseline path is built on first draw and
/// reused after that.
#[derive(Debug, Clone)]
pub struct TextLayout {
    text: String,
    paint: TextPaint,
    width: f32,
    align: TextAlign,
    text_bounds: Rect,
    reference_bounds: Rect,
    vertical_inset: f32,
    baseline: Option<Path>,
}

impl TextLayout {
    pub fn new<M: TextMeasure + ?Sized>(
        text: impl Into<String>,
        paint: TextPaint,
        width: f32,
        align: TextAlign,
        measure: &M,
    ) -> Self {
        let text = text.into();
        let reference_bounds = measure.measure_text(REFERENCE_GLYPHS, &paint);
        let text_bounds = measure.measure_text(&text, &paint);

        Self {
            vertical_inset: reference_bounds.height() - text_bounds.height(),
            text,
            paint,
            width,
            align,
            text_bounds,
            reference_bounds,
            baseline: None,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn paint(&self) -> &TextPaint {
        &self.paint
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn align(&self) -> TextAlign {
        self.align
    }

    #[inline]
    pub fn text_bounds(&self) -> Rect {
        self.text_bounds
    }

    #[inline]
    pub fn reference_bounds(&self) -> Rect {
        self.reference_bounds
    }

    /// Reference height minus text height.
    #[inline]
    pub fn vertical_inset(&self) -> f32 {
        self.vertical_inset
    }

    /// Line height: the reference glyph height plus half a unit.
    #[inline]
    pub fn height(&self) -> f32 {
        self.reference_bounds.height() + 0.5
    }

    /// Y of the baseline within the layout box.
    #[inline]
    pub fn baseline_y(&self) -> f32 {
        self.text_bounds.height() + self.vertical_inset - 1.0
    }

    /// The baseline path, building it if needed.
    pub fn baseline_path(&mut self) -> &Path {
        let y = self.baseline_y();
        let width = self.width;
        self.baseline
            .get_or_insert_with(|| Path::line(Vec2::new(0.0, y), Vec2::new(width, y)))
    }

    /// Returns true once the baseline path has been built.
    #[inline]
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    /// Draws the text along its baseline.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.draw_at(canvas, Vec2::zero());
    }

    /// Draws the text along its baseline, shifted by `offset`.
    ///
    /// The baseline is horizontal, so the offset's x runs along it and its y
    /// moves the line down.
    pub fn draw_at<C: Canvas + ?Sized>(&mut self, canvas: &mut C, offset: Vec2) {
        let y = self.baseline_y();
        let width = self.width;
        let path = self
            .baseline
            .get_or_insert_with(|| Path::line(Vec2::new(0.0, y), Vec2::new(width, y)));
        canvas.draw_text_on_path(&self.text, path, offset, &self.paint, self.align);
    }
}
