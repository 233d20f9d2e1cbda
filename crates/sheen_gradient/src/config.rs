//! Gradient configuration
//!
//! Describes how a gradient is drawn: its shape, its normalized endpoints,
//! the easing curve between anchors and how many intermediate colors are
//! generated per anchor pair.

use serde::{Deserialize, Serialize};
use sheen_animation::Easing;
use sheen_core::{GradientKind, Point};

use crate::Result;

/// Intermediate colors generated between two anchors unless configured
pub const DEFAULT_SMOOTHNESS: u32 = 24;

/// Configuration of the gradient drawn
///
/// Missing fields in a serialized configuration fall back to
/// [`GradientConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// The kind of gradient that will be drawn
    pub kind: GradientKind,
    /// Easing curve between consecutive anchors. Default is
    /// [`Easing::EaseInOutSine`]
    pub easing: Easing,
    /// Number of intermediate colors computed between consecutive anchors.
    /// Default is [`DEFAULT_SMOOTHNESS`]
    pub smoothness: u32,
    /// Start point in the surface's normalized coordinate space
    pub start: Point,
    /// End point in the surface's normalized coordinate space
    pub end: Point,
}

impl GradientConfig {
    pub fn new(kind: GradientKind, start: Point, end: Point) -> Self {
        Self {
            kind,
            easing: Easing::EaseInOutSine,
            smoothness: DEFAULT_SMOOTHNESS,
            start,
            end,
        }
    }

    /// A linear gradient that starts at the top and ends at the bottom
    pub fn vertical() -> Self {
        Self::new(GradientKind::Linear, Point::TOP, Point::BOTTOM)
    }

    /// A linear gradient that starts at the left and ends at the right
    pub fn horizontal() -> Self {
        Self::new(GradientKind::Linear, Point::LEFT, Point::RIGHT)
    }

    /// A radial gradient that starts at the center and ends at the top right
    pub fn radial() -> Self {
        Self::new(GradientKind::Radial, Point::CENTER, Point::TOP_RIGHT)
    }

    /// A conic gradient that starts at the center and ends at the top right
    pub fn conic() -> Self {
        Self::new(GradientKind::Conic, Point::CENTER, Point::TOP_RIGHT)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_smoothness(mut self, smoothness: u32) -> Self {
        self.smoothness = smoothness;
        self
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self::vertical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradientError;

    #[test]
    fn test_defaults() {
        let config = GradientConfig::default();
        assert_eq!(config, GradientConfig::vertical());
        assert_eq!(config.easing, Easing::EaseInOutSine);
        assert_eq!(config.smoothness, 24);
    }

    #[test]
    fn test_presets() {
        let vertical = GradientConfig::vertical();
        assert_eq!(vertical.kind, GradientKind::Linear);
        assert_eq!((vertical.start, vertical.end), (Point::TOP, Point::BOTTOM));

        let horizontal = GradientConfig::horizontal();
        assert_eq!(horizontal.kind, GradientKind::Linear);
        assert_eq!((horizontal.start, horizontal.end), (Point::LEFT, Point::RIGHT));

        let radial = GradientConfig::radial();
        assert_eq!(radial.kind, GradientKind::Radial);
        assert_eq!((radial.start, radial.end), (Point::CENTER, Point::TOP_RIGHT));

        let conic = GradientConfig::conic();
        assert_eq!(conic.kind, GradientKind::Conic);
        assert_eq!((conic.start, conic.end), (Point::CENTER, Point::TOP_RIGHT));
    }

    #[test]
    fn test_builder_setters() {
        let config = GradientConfig::radial()
            .with_easing(Easing::EaseOutBounce)
            .with_smoothness(3);
        assert_eq!(config.easing, Easing::EaseOutBounce);
        assert_eq!(config.smoothness, 3);
        assert_eq!(config.kind, GradientKind::Radial);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GradientConfig::from_toml_str(
            r#"
            kind = "conic"
            easing = "ease-out-expo"
            "#,
        )
        .unwrap();

        assert_eq!(config.kind, GradientKind::Conic);
        assert_eq!(config.easing, Easing::EaseOutExpo);
        assert_eq!(config.smoothness, DEFAULT_SMOOTHNESS);
        assert_eq!(config.start, Point::TOP);
        assert_eq!(config.end, Point::BOTTOM);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GradientConfig::horizontal()
            .with_easing(Easing::EaseInOutElastic)
            .with_smoothness(7);

        let toml = config.to_toml().unwrap();
        assert_eq!(GradientConfig::from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_unknown_easing_is_a_parse_error() {
        let result = GradientConfig::from_toml_str(r#"easing = "wobble""#);
        assert!(matches!(result, Err(GradientError::Parse(_))));
    }
}
