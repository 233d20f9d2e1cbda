//! Color mixing
//!
//! Blends two colors channel by channel with a degree-one Bézier (plain
//! linear interpolation). Each input is normalized to RGBA on its own, so a
//! grayscale color can be mixed with an RGBA one. The result is always RGBA.
//!
//! The ratio is not clamped: easing curves that overshoot (back, elastic)
//! produce ratios below 0 or above 1, and the mixer extrapolates linearly.

use crate::Color;

/// Two colors and the ratio to blend them with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMixer {
    pub c1: Color,
    pub c2: Color,
    /// 0.0 selects `c1`, 1.0 selects `c2`
    pub ratio: f32,
}

impl ColorMixer {
    pub fn new(c1: Color, c2: Color, ratio: f32) -> Self {
        Self { c1, c2, ratio }
    }

    pub fn mix(&self) -> Color {
        let [r1, g1, b1, a1] = self.c1.to_array();
        let [r2, g2, b2, a2] = self.c2.to_array();

        Color::rgba(
            bezier_curve(self.ratio, r1, r2),
            bezier_curve(self.ratio, g1, g2),
            bezier_curve(self.ratio, b1, b2),
            bezier_curve(self.ratio, a1, a2),
        )
    }
}

/// Linear Bézier between `p0` and `p1`.
///
/// Written as `(1 - t) * p0 + t * p1` so both endpoints are reproduced
/// exactly at `t = 0` and `t = 1`.
#[inline]
fn bezier_curve(t: f32, p0: f32, p1: f32) -> f32 {
    (1.0 - t) * p0 + t * p1
}

impl Color {
    /// Mix this color with `other`; see [`ColorMixer`]
    pub fn mix(&self, other: &Color, ratio: f32) -> Color {
        ColorMixer::new(*self, *other, ratio).mix()
    }
}
