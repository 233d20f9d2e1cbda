//! Eased color interpolation
//!
//! Expands anchors `[c0, c1, ..., cn]` into
//!
//! ```text
//! c0 = s(0,0) s(0,1) .. s(0,steps) | c1 = s(1,0) .. s(1,steps) | ... | cn
//! ```
//!
//! where `s(i, k) = mix(c_i, c_{i+1}, easing(k / (steps + 1)))`. Each anchor
//! pair contributes `steps + 1` colors starting with its own first anchor;
//! the pair's second anchor is produced by the next pair (or appended as-is
//! when it is the last anchor). With `steps == 0`, or fewer than two anchors,
//! the anchors are returned unchanged.

use sheen_animation::Easing;
use sheen_core::Color;
use tracing::{debug, trace};

/// Anchor colors plus the curve and step count used to expand them
#[derive(Clone, Debug, PartialEq)]
pub struct ColorInterpolator {
    colors: Vec<Color>,
    easing: Easing,
    steps: u32,
}

impl ColorInterpolator {
    /// `steps` is the number of intermediate colors generated between each
    /// pair of consecutive anchors
    pub fn new(colors: Vec<Color>, easing: Easing, steps: u32) -> Self {
        Self {
            colors,
            easing,
            steps,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Number of colors [`interpolate`](Self::interpolate) will produce
    pub fn output_len(&self) -> usize {
        match self.colors.len() {
            n if n <= 1 => n,
            n => (n - 1) * (self.steps as usize + 1) + 1,
        }
    }

    /// Expand the anchors into the eased color sequence
    pub fn interpolate(&self) -> Vec<Color> {
        let mut output = Vec::with_capacity(self.output_len());

        for (index, color) in self.colors.iter().enumerate() {
            match self.colors.get(index + 1) {
                Some(next) if self.steps > 0 => {
                    trace!(segment = index, steps = self.steps, "interpolating segment");
                    output.extend(segment(*color, *next, self.easing, self.steps));
                }
                _ => output.push(*color),
            }
        }

        debug!(
            anchors = self.colors.len(),
            steps = self.steps,
            easing = self.easing.name(),
            produced = output.len(),
            "interpolated gradient colors"
        );
        output
    }
}

/// `steps + 1` colors from `from` (inclusive) towards `to` (exclusive)
fn segment(from: Color, to: Color, easing: Easing, steps: u32) -> impl Iterator<Item = Color> {
    let divisor = steps as f32 + 1.0;
    (0..=steps).map(move |offset| {
        let ratio = offset as f32 / divisor;
        easing.interpolate(&from, &to, ratio)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(colors: &[Color]) -> Vec<Vec<f32>> {
        colors.iter().map(|c| c.components().to_vec()).collect()
    }

    #[test]
    fn test_linear_interpolation_with_zero_steps() {
        let sut = ColorInterpolator::new(vec![Color::gray(1.0), Color::gray(0.0)], Easing::Linear, 0);

        let result = sut.interpolate();

        assert_eq!(components(&result), vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_linear_interpolation_with_three_steps() {
        let cyan = Color::rgba(0.0, 1.0, 1.0, 1.0);
        let green = Color::rgba(0.0, 1.0, 0.0, 1.0);
        let sut = ColorInterpolator::new(vec![cyan, green], Easing::Linear, 3);

        let result = sut.interpolate();

        assert_eq!(
            components(&result),
            vec![
                vec![0.0, 1.0, 1.00, 1.0],
                vec![0.0, 1.0, 0.75, 1.0],
                vec![0.0, 1.0, 0.50, 1.0],
                vec![0.0, 1.0, 0.25, 1.0],
                vec![0.0, 1.0, 0.00, 1.0],
            ]
        );
    }

    #[test]
    fn test_empty_anchor_list() {
        for easing in Easing::all() {
            let sut = ColorInterpolator::new(Vec::new(), easing, 24);
            assert!(sut.interpolate().is_empty());
            assert_eq!(sut.output_len(), 0);
        }
    }

    #[test]
    fn test_single_anchor_is_returned_unchanged() {
        let anchor = Color::gray_alpha(0.3, 0.7);
        for easing in Easing::all() {
            for steps in [0, 1, 24, 100] {
                let result = ColorInterpolator::new(vec![anchor], easing, steps).interpolate();
                assert_eq!(result, vec![anchor]);
            }
        }
    }

    #[test]
    fn test_output_length() {
        let anchors = [Color::RED, Color::GREEN, Color::BLUE, Color::gray(0.5), Color::WHITE];
        for count in 0..=anchors.len() {
            for steps in [0u32, 1, 2, 7, 24] {
                let sut = ColorInterpolator::new(anchors[..count].to_vec(), Easing::EaseInOutSine, steps);
                let expected = if count <= 1 {
                    count
                } else {
                    (count - 1) * (steps as usize + 1) + 1
                };
                assert_eq!(sut.interpolate().len(), expected);
                assert_eq!(sut.output_len(), expected);
            }
        }
    }

    #[test]
    fn test_anchors_reappear_at_segment_boundaries() {
        let anchors = vec![
            Color::rgba(0.9, 0.1, 0.3, 1.0),
            Color::rgba(0.2, 0.8, 0.6, 0.5),
            Color::rgba(0.4, 0.4, 1.0, 0.25),
        ];
        let steps = 5;

        for easing in [Easing::Linear, Easing::EaseInOutSine, Easing::EaseInOutQuad] {
            let result = ColorInterpolator::new(anchors.clone(), easing, steps).interpolate();
            let stride = steps as usize + 1;

            assert_eq!(result[0], anchors[0]);
            assert_eq!(result[stride], anchors[1]);
            assert_eq!(result[2 * stride], anchors[2]);
            assert_eq!(result.last(), anchors.last());
        }
    }

    #[test]
    fn test_zero_steps_keeps_anchor_models() {
        let anchors = vec![Color::gray(0.2), Color::RED, Color::gray_alpha(0.9, 0.5)];
        let result = ColorInterpolator::new(anchors.clone(), Easing::EaseOutBounce, 0).interpolate();
        assert_eq!(result, anchors);
    }

    #[test]
    fn test_gray_junctions_come_back_as_rgba() {
        let anchors = vec![Color::gray(0.2), Color::gray(0.6), Color::gray(1.0)];
        let result = ColorInterpolator::new(anchors, Easing::Linear, 2).interpolate();

        assert_eq!(result.len(), 7);
        assert_eq!(result[0], Color::rgb(0.2, 0.2, 0.2));
        assert_eq!(result[3], Color::rgb(0.6, 0.6, 0.6));
        assert!(!result[3].is_grayscale());

        // Only the final anchor skips the mixer
        assert_eq!(result[6], Color::gray(1.0));
        assert!(result[6].is_grayscale());
    }

    #[test]
    fn test_steps_follow_the_curve() {
        let sut = ColorInterpolator::new(vec![Color::BLACK, Color::WHITE], Easing::EaseInQuad, 3);
        let reds: Vec<f32> = sut.interpolate().iter().map(|c| c.to_array()[0]).collect();

        assert_eq!(reds, vec![0.0, 0.0625, 0.25, 0.5625, 1.0]);
    }

    #[test]
    fn test_monotonic_curve_yields_monotonic_steps() {
        let sut = ColorInterpolator::new(vec![Color::BLACK, Color::WHITE], Easing::EaseInOutSine, 24);
        let reds: Vec<f32> = sut.interpolate().iter().map(|c| c.to_array()[0]).collect();

        assert!(reds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_overshooting_curve_extrapolates() {
        let sut = ColorInterpolator::new(vec![Color::BLACK, Color::WHITE], Easing::EaseInBack, 9);
        let reds: Vec<f32> = sut.interpolate().iter().map(|c| c.to_array()[0]).collect();

        assert!(reds.iter().any(|&r| r < 0.0));
    }
}
