//! Sheen Core
//!
//! Foundational value types shared by every Sheen crate:
//!
//! - **Color**: RGBA or grayscale+alpha colors in the unit interval
//! - **Color Mixer**: per-channel linear blending between two colors
//! - **Geometry**: normalized points and the named coordinate presets
//! - **Gradient**: renderer-neutral gradient descriptions built from stops
//!
//! # Example
//!
//! ```rust
//! use sheen_core::Color;
//!
//! let white = Color::gray(1.0);
//! let black = Color::gray(0.0);
//!
//! let mixed = white.mix(&black, 0.25);
//! assert_eq!(mixed, Color::rgba(0.75, 0.75, 0.75, 1.0));
//! ```

pub mod color;
pub mod geometry;
pub mod gradient;
pub mod mixer;

pub use color::{Color, ParseColorError};
pub use geometry::Point;
pub use gradient::{Gradient, GradientKind, GradientStop};
pub use mixer::ColorMixer;
