//! Sheen Gradients
//!
//! Expands a short list of anchor colors into a dense, eased color sequence
//! and packages it for a gradient renderer.
//!
//! # Example
//!
//! ```rust
//! use sheen_animation::Easing;
//! use sheen_core::Color;
//! use sheen_gradient::ColorInterpolator;
//!
//! let interpolator = ColorInterpolator::new(
//!     vec![Color::rgb(0.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 0.0)],
//!     Easing::Linear,
//!     3,
//! );
//!
//! let colors = interpolator.interpolate();
//! assert_eq!(colors.len(), 5);
//! assert_eq!(colors[2], Color::rgb(0.0, 1.0, 0.5));
//! ```

pub mod config;
mod error;
pub mod interpolator;
pub mod smooth;

pub use config::{GradientConfig, DEFAULT_SMOOTHNESS};
pub use error::{GradientError, Result};
pub use interpolator::ColorInterpolator;
pub use smooth::SmoothGradient;

// Re-export the value types callers need to build requests
pub use sheen_animation::Easing;
pub use sheen_core::{Color, Gradient, GradientKind, GradientStop, Point};
