use std::cell::Cell;
use std::fmt;

use crate::coords::Rect;
use crate::render::TextMeasure;

use super::TextPaint;

/// Error returned when a typeface cannot be resolved or parsed.
///
/// Missing fonts are never substituted; callers decide whether the failure
/// is fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum FontLoadError {
    /// The process-wide registry was used before a provider was installed.
    NoProvider,
    /// The provider has no font under this name.
    NotFound(String),
    /// Reading the font data failed.
    Io { name: String, message: String },
    /// The font data could not be parsed.
    Parse { name: String, message: String },
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::NoProvider => write!(f, "font load error: no font provider installed"),
            FontLoadError::NotFound(name) => write!(f, "font load error: '{name}' not found"),
            FontLoadError::Io { name, message } => {
                write!(f, "font load error: reading '{name}': {message}")
            }
            FontLoadError::Parse { name, message } => {
                write!(f, "font load error: parsing '{name}': {message}")
            }
        }
    }
}

impl std::error::Error for FontLoadError {}

/// Turns raw font bytes into the face type a registry stores.
pub trait LoadTypeface: Sized {
    fn load(name: &str, bytes: &[u8]) -> Result<Self, FontLoadError>;
}

/// A parsed font, identified by the name it was loaded under.
///
/// Immutable after loading and shared as `Arc<Typeface>`.
pub struct Typeface {
    name: String,
    font: fontdue::Font,
}

impl Typeface {
    /// Parses a TrueType or OpenType font.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, FontLoadError> {
        let name = name.into();
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse { name: name.clone(), message: e.to_string() })?;
        Ok(Self { name, font })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying `fontdue::Font`, for backends that rasterize glyphs.
    #[inline]
    pub fn font(&self) -> &fontdue::Font {
        &self.font
    }

    /// Ink bounds of `text` set on a single line at `size`.
    ///
    /// The origin is the start of the baseline, +Y down, so glyphs above the
    /// baseline have a negative top. Kerning is applied. Whitespace-only
    /// text yields an empty rect at the origin.
    pub fn measure(&self, text: &str, size: f32) -> Rect {
        let mut pen = 0.0f32;
        let mut prev: Option<char> = None;
        let mut bounds: Option<Rect> = None;

        for ch in text.chars() {
            if let Some(p) = prev {
                pen += self.font.horizontal_kern(p, ch, size).unwrap_or(0.0);
            }
            let m = self.font.metrics(ch, size);
            if m.bounds.width > 0.0 && m.bounds.height > 0.0 {
                let glyph = Rect::from_ltrb(
                    pen + m.bounds.xmin,
                    -(m.bounds.ymin + m.bounds.height),
                    pen + m.bounds.xmin + m.bounds.width,
                    -m.bounds.ymin,
                );
                bounds = Some(bounds.map_or(glyph, |b| b.union(glyph)));
            }
            pen += m.advance_width;
            prev = Some(ch);
        }

        bounds.unwrap_or_default()
    }
}

impl PartialEq for Typeface {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.font.file_hash() == other.font.file_hash()
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typeface")
            .field("name", &self.name)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl LoadTypeface for Typeface {
    fn load(name: &str, bytes: &[u8]) -> Result<Self, FontLoadError> {
        Typeface::from_bytes(name, bytes)
    }
}

/// [`TextMeasure`] backed by the paint's typeface.
///
/// Paints without a typeface fall back to a size-based estimate (cap height
/// `0.7 × size`, advance `0.5 × size` per character) and a one-time debug
/// message.
#[derive(Debug, Default)]
pub struct FontMetrics {
    warned_missing_face: Cell<bool>,
}

impl FontMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextMeasure for FontMetrics {
    fn measure_text(&self, text: &str, paint: &TextPaint) -> Rect {
        if let Some(face) = &paint.typeface {
            return face.measure(text, paint.size);
        }

        if !self.warned_missing_face.replace(true) {
            log::debug!("FontMetrics: paint has no typeface; using estimated metrics");
        }
        let chars = text.chars().filter(|c| !c.is_whitespace()).count();
        if chars == 0 {
            return Rect::default();
        }
        let cap = paint.size * 0.7;
        Rect::new(0.0, -cap, text.chars().count() as f32 * paint.size * 0.5, cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::text::{TextAlign, TextLayout};
    use std::sync::Arc;

    /// System fonts the outline tests run against; they skip when none exist.
    const SYSTEM_FONTS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ];

    fn system_face() -> Option<Typeface> {
        let bytes = SYSTEM_FONTS.iter().find_map(|p| std::fs::read(p).ok())?;
        Typeface::from_bytes("system", &bytes).ok()
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = Typeface::from_bytes("Broken.ttf", b"definitely not a font").unwrap_err();
        match err {
            FontLoadError::Parse { name, .. } => assert_eq!(name, "Broken.ttf"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn errors_display_the_font_name() {
        let e = FontLoadError::NotFound("Fonts.Body.ttf".into());
        assert_eq!(e.to_string(), "font load error: 'Fonts.Body.ttf' not found");
    }

    // ── estimated metrics ─────────────────────────────────────────────────

    #[test]
    fn estimate_without_typeface() {
        let m = FontMetrics::new();
        let paint = TextPaint::new(10.0, Color::BLACK);
        let r = m.measure_text("Ab c", &paint);
        assert_eq!(r, Rect::new(0.0, -7.0, 20.0, 7.0));
        assert_eq!(m.measure_text("   ", &paint), Rect::default());
    }

    // ── outline metrics ───────────────────────────────────────────────────

    #[test]
    fn ink_bounds_are_baseline_relative() {
        let Some(face) = system_face() else {
            eprintln!("no system font found; skipping");
            return;
        };

        let cap = face.measure("A", 20.0);
        assert!(cap.top() < -10.0, "cap top {}", cap.top());
        assert!(cap.bottom().abs() < 1.0, "A sits on the baseline: {}", cap.bottom());

        // The comma reaches below the baseline.
        let reference = face.measure("A,", 20.0);
        assert!(reference.bottom() > 0.5, "comma descent {}", reference.bottom());
        assert_eq!(reference.top(), cap.top());
        assert!(reference.right() > cap.right());

        assert_eq!(face.measure("", 20.0), Rect::default());
        assert_eq!(face.measure("   ", 20.0), Rect::default());
    }

    #[test]
    fn ink_bounds_apply_kerning() {
        let Some(face) = system_face() else {
            eprintln!("no system font found; skipping");
            return;
        };
        let font = face.font();
        let size = 40.0;

        let a = font.metrics('A', size);
        let v = font.metrics('V', size);
        let kern = font.horizontal_kern('A', 'V', size).unwrap_or(0.0);
        let expected_right = a.advance_width + kern + v.bounds.xmin + v.bounds.width;

        let r = face.measure("AV", size);
        assert!((r.right() - expected_right).abs() < 1e-3, "{} vs {}", r.right(), expected_right);
        assert!((r.left() - a.bounds.xmin).abs() < 1e-3);
    }

    #[test]
    fn layout_inset_over_real_face() {
        let Some(face) = system_face() else {
            eprintln!("no system font found; skipping");
            return;
        };
        let paint = TextPaint::new(18.0, Color::BLACK).with_typeface(Arc::new(face));
        let metrics = FontMetrics::new();

        // Text without descenders or taller glyphs fits inside the reference.
        for text in ["ace", "Hi", "Save"] {
            let layout = TextLayout::new(text, paint.clone(), 120.0, TextAlign::Left, &metrics);
            assert!(layout.vertical_inset() >= 0.0, "{text:?}: {}", layout.vertical_inset());
            assert!(layout.baseline_y() < layout.height(), "{text:?}");
        }

        let reference = TextLayout::new("A,", paint, 120.0, TextAlign::Left, &metrics);
        assert_eq!(reference.vertical_inset(), 0.0);
    }
}
