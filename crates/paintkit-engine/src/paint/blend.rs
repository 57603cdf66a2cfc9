//! Color adjustments used by generated drawing code.
//!
//! All operations are total over 8-bit inputs. Interpolated channels are
//! truncated toward zero and saturate at the byte range.

use super::Color;

impl Color {
    /// Linear per-channel interpolation: `ratio = 0` yields `self`,
    /// `ratio = 1` yields `other`. Alpha is interpolated like the color
    /// channels.
    #[inline]
    pub fn blend(self, ratio: f32, other: Color) -> Color {
        Color::from_argb(
            lerp_channel(self.a, ratio, other.a),
            lerp_channel(self.r, ratio, other.r),
            lerp_channel(self.g, ratio, other.g),
            lerp_channel(self.b, ratio, other.b),
        )
    }

    /// Same color with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Color {
        Color::from_argb(alpha, self.r, self.g, self.b)
    }

    /// Same hue and value with saturation replaced (`[0, 1]`). Alpha is kept.
    pub fn with_saturation(self, saturation: f32) -> Color {
        let (h, _, v) = self.to_hsv();
        Color::from_hsv(self.a, h, saturation, v)
    }

    /// Same saturation and value with hue replaced (degrees). Alpha is kept.
    pub fn with_hue(self, hue: f32) -> Color {
        let (_, s, v) = self.to_hsv();
        Color::from_hsv(self.a, hue, s, v)
    }

    /// Same hue and saturation with value replaced (`[0, 1]`). Alpha is kept.
    pub fn with_brightness(self, brightness: f32) -> Color {
        let (h, s, _) = self.to_hsv();
        Color::from_hsv(self.a, h, s, brightness)
    }

    /// Hue in degrees `[0, 360)`.
    #[inline]
    pub fn hue(self) -> f32 {
        self.to_hsv().0
    }

    #[inline]
    pub fn saturation(self) -> f32 {
        self.to_hsv().1
    }

    #[inline]
    pub fn brightness(self) -> f32 {
        self.to_hsv().2
    }

    /// Blends toward white at this color's own alpha.
    #[inline]
    pub fn highlight(self, ratio: f32) -> Color {
        self.blend(ratio, Color::WHITE.with_alpha(self.a))
    }

    /// Blends toward black at this color's own alpha.
    #[inline]
    pub fn shadow(self, ratio: f32) -> Color {
        self.blend(ratio, Color::BLACK.with_alpha(self.a))
    }
}

#[inline]
fn lerp_channel(a: u8, ratio: f32, b: u8) -> u8 {
    // `as u8` saturates out-of-range floats and maps NaN to 0.
    ((1.0 - ratio) * a as f32 + ratio * b as f32) as u8
}
