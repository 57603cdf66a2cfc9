/// Straight-alpha ARGB color with 8-bit channels.
///
/// This is the color model design tools export: every channel is an
/// independent byte and values are never premultiplied. Backends that want
/// premultiplied floats use [`Color::to_premul_f32`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0x00, 0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::from_u32(0xffff_ffff);
    pub const GRAY: Color = Color::from_u32(0xff88_8888);
    pub const BLACK: Color = Color::from_u32(0xff00_0000);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from red, green and blue bytes.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xff, r, g, b)
    }

    /// Unpacks a `0xAARRGGBB` literal.
    #[inline]
    pub const fn from_u32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs into a `0xAARRGGBB` value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 0xff
    }

    /// Returns premultiplied `[r, g, b, a]` in `[0, 1]`.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }

    /// Converts to hue/saturation/value.
    ///
    /// Hue is in degrees `[0, 360)`; saturation and value are in `[0, 1]`.
    /// Achromatic colors report a hue of `0`.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max <= 0.0 { 0.0 } else { delta / max };
        let h = if delta <= 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        (h.rem_euclid(360.0), s, max)
    }

    /// Builds a color from hue/saturation/value and an alpha byte.
    ///
    /// Hue wraps around 360; saturation and value are clamped to `[0, 1]`.
    pub fn from_hsv(a: u8, h: f32, s: f32, v: f32) -> Self {
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let h = h.rem_euclid(360.0) / 60.0;

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        // A hue just below zero wraps to exactly 360.0, landing in sector 6.
        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::from_argb(a, unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }
}

#[inline]
fn unit_to_u8(x: f32) -> u8 {
    (x * 255.0).round() as u8
}
