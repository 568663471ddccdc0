//! Straight (non-premultiplied) RGBA colour used for circle and caption fills.

use std::fmt;

/// Colour with `r`, `g`, `b` in `0..=255` and alpha in `0..=1`.
///
/// Channels are kept as `f32` so tweens can interpolate without rounding on
/// every frame; rounding happens only when the colour is formatted for CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channel-wise linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Rgba, t: f32) -> Rgba {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        Rgba {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
            a: self.a + (to.a - self.a) * t,
        }
    }

    /// CSS `rgba(...)` string, colour channels rounded to integers.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        write!(f, "rgba({}, {}, {}, {})", ch(self.r), ch(self.g), ch(self.b), a)
    }
}
