//! Smooth gradients
//!
//! A [`SmoothGradient`] pairs anchor colors with a [`GradientConfig`] and
//! produces what a renderer needs: the eased color sequence spread over
//! evenly spaced stops, plus the configured shape and endpoints.
//!
//! Gradient files are TOML:
//!
//! ```toml
//! colors = ["#ff0000", "#00ff00", { gray = 0.5 }]
//!
//! [config]
//! kind = "radial"
//! easing = "ease-out-bounce"
//! smoothness = 12
//! start = { x = 0.5, y = 0.5 }
//! end = { x = 1.0, y = 0.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sheen_core::{Color, Gradient};
use tracing::debug;

use crate::{ColorInterpolator, GradientConfig, Result};

/// Anchor colors and the configuration used to smooth them
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothGradient {
    /// The color of each anchor stop, in order
    pub colors: Vec<Color>,
    /// Defines the style of the gradient. Default is
    /// [`GradientConfig::vertical`]
    #[serde(default)]
    pub config: GradientConfig,
}

impl SmoothGradient {
    pub fn new(colors: Vec<Color>, config: GradientConfig) -> Self {
        Self { colors, config }
    }

    /// Interpolator for the anchors with the configured easing and smoothness
    pub fn interpolator(&self) -> ColorInterpolator {
        ColorInterpolator::new(self.colors.clone(), self.config.easing, self.config.smoothness)
    }

    pub fn interpolated_colors(&self) -> Vec<Color> {
        self.interpolator().interpolate()
    }

    /// Renderer-neutral gradient with one evenly spaced stop per
    /// interpolated color
    pub fn to_gradient(&self) -> Gradient {
        let colors = self.interpolated_colors();
        Gradient::with_even_stops(self.config.kind, self.config.start, self.config.end, &colors)
    }

    /// Parse a gradient file's contents
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a gradient file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let gradient = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            anchors = gradient.colors.len(),
            "loaded gradient file"
        );
        Ok(gradient)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradientError;
    use sheen_animation::Easing;
    use sheen_core::{GradientKind, GradientStop, Point};

    #[test]
    fn test_default_configuration_smooths_with_24_steps() {
        let gradient = SmoothGradient::new(vec![Color::RED, Color::BLUE], GradientConfig::default());

        let colors = gradient.interpolated_colors();
        assert_eq!(colors.len(), 26);
        assert_eq!(colors.first(), Some(&Color::RED));
        assert_eq!(colors.last(), Some(&Color::BLUE));
    }

    #[test]
    fn test_to_gradient_uses_configuration() {
        let config = GradientConfig::conic().with_easing(Easing::Linear).with_smoothness(1);
        let gradient = SmoothGradient::new(vec![Color::gray(0.0), Color::gray(1.0)], config);

        let rendered = gradient.to_gradient();

        assert_eq!(rendered.kind(), GradientKind::Conic);
        assert_eq!(rendered.start(), Point::CENTER);
        assert_eq!(rendered.end(), Point::TOP_RIGHT);
        assert_eq!(
            rendered.stops(),
            &[
                GradientStop::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
                GradientStop::new(0.5, Color::rgb(0.5, 0.5, 0.5)),
                GradientStop::new(1.0, Color::rgb(1.0, 1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_empty_gradient_has_no_stops() {
        let gradient = SmoothGradient::default();
        assert!(gradient.interpolated_colors().is_empty());
        assert!(gradient.to_gradient().stops().is_empty());
    }

    #[test]
    fn test_parse_gradient_file() {
        let gradient = SmoothGradient::from_toml_str(
            r##"
            colors = ["#ff0000", "#00ff00", { gray = 0.5 }]

            [config]
            kind = "radial"
            easing = "ease-out-bounce"
            smoothness = 12
            start = { x = 0.5, y = 0.5 }
            end = { x = 1.0, y = 0.0 }
            "##,
        )
        .unwrap();

        assert_eq!(gradient.colors, vec![Color::RED, Color::GREEN, Color::gray(0.5)]);
        assert_eq!(
            gradient.config,
            GradientConfig::radial()
                .with_easing(Easing::EaseOutBounce)
                .with_smoothness(12)
        );
        assert_eq!(gradient.interpolated_colors().len(), 2 * 13 + 1);
    }

    #[test]
    fn test_missing_config_section_uses_defaults() {
        let gradient = SmoothGradient::from_toml_str(r##"colors = ["#000", "#fff"]"##).unwrap();
        assert_eq!(gradient.config, GradientConfig::default());
    }

    #[test]
    fn test_invalid_color_is_a_parse_error() {
        let result = SmoothGradient::from_toml_str(r##"colors = ["#12"]"##);
        assert!(matches!(result, Err(GradientError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = SmoothGradient::load(Path::new("/nonexistent/sheen/gradient.toml"));
        assert!(matches!(result, Err(GradientError::Io(_))));
    }

    #[test]
    fn test_toml_round_trip_keeps_color_models() {
        let gradient = SmoothGradient::new(
            vec![Color::gray_alpha(0.25, 0.5), Color::rgba(0.0, 0.5, 1.0, 1.0)],
            GradientConfig::horizontal().with_smoothness(4),
        );

        let toml = gradient.to_toml().unwrap();
        assert_eq!(SmoothGradient::from_toml_str(&toml).unwrap(), gradient);
    }

    #[test]
    fn test_gradient_serializes_to_json() {
        let config = GradientConfig::vertical().with_smoothness(0);
        let rendered = SmoothGradient::new(vec![Color::BLACK], config).to_gradient();

        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["type"], "linear");
        assert_eq!(json["stops"][0]["offset"], 0.0);
        assert_eq!(json["stops"][0]["color"]["a"], 1.0);
    }
}
