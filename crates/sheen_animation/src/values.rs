//! Interpolatable value types
//!
//! Provides the [`Interpolate`] trait and its implementations for scalars,
//! points and colors. Interpolation is never clamped, so the overshoot of
//! back and elastic curves carries through to the value.

use sheen_core::{Color, Point};

use crate::easing::Easing;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t
    /// (0.0 selects self, 1.0 selects other)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        (1.0 - t) * self + t * other
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Point Implementation
// ============================================================================

impl Interpolate for Point {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Point::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.approx_eq(&other.x, epsilon) && self.y.approx_eq(&other.y, epsilon)
    }
}

// ============================================================================
// Color Implementation
// ============================================================================

impl Interpolate for Color {
    /// Delegates to the color mixer; the result is always RGBA
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.mix(other, t)
    }

    /// Compares the normalized RGBA channels, so a gray and its RGB
    /// equivalent are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.approx_eq(b, epsilon))
    }
}

// ============================================================================
// Eased interpolation
// ============================================================================

impl Easing {
    /// Interpolate from `from` to `to` with progress shaped by this curve
    pub fn interpolate<T: Interpolate>(self, from: &T, to: &T, progress: f32) -> T {
        from.lerp(to, self.calculate(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp_endpoints() {
        assert_eq!(0.3f32.lerp(&0.9, 0.0), 0.3);
        assert_eq!(0.3f32.lerp(&0.9, 1.0), 0.9);
        assert!(0.0f32.lerp(&10.0, 0.5).approx_eq(&5.0, 1e-6));
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert!(0.0f32.lerp(&1.0, 1.5).approx_eq(&1.5, 1e-6));
        assert!(0.0f32.lerp(&1.0, -0.5).approx_eq(&-0.5, 1e-6));
    }

    #[test]
    fn test_point_lerp() {
        let mid = Point::TOP_LEFT.lerp(&Point::BOTTOM_RIGHT, 0.5);
        assert!(mid.approx_eq(&Point::CENTER, 1e-6));
    }

    #[test]
    fn test_color_lerp_uses_mixer() {
        let mixed = Color::gray(1.0).lerp(&Color::gray(0.0), 0.25);
        assert_eq!(mixed, Color::rgba(0.75, 0.75, 0.75, 1.0));
        assert!(Color::gray(0.5).approx_eq(&Color::GRAY, 1e-6));
    }

    #[test]
    fn test_eased_interpolation() {
        let value = Easing::EaseInQuad.interpolate(&0.0f32, &8.0, 0.5);
        assert!(value.approx_eq(&2.0, 1e-6));

        let color = Easing::Linear.interpolate(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(color, Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_eased_interpolation_overshoots() {
        let value = Easing::EaseOutBack.interpolate(&0.0f32, &1.0, 0.8);
        assert!(value > 1.0);
    }
}
