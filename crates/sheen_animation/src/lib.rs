//! Sheen Animation
//!
//! Easing curves and interpolatable values.
//!
//! # Features
//!
//! - **Easing Catalog**: 31 named curves (linear, quad, cubic, quart, quint,
//!   sine, circ, expo, back, bounce, elastic) in their in/out/in-out forms
//! - **Nominal Identity**: curves compare and hash by catalog entry
//! - **Interpolate**: unclamped linear interpolation for `f32`, points and
//!   colors, so overshooting curves extrapolate instead of saturating

pub mod easing;
pub mod values;

pub use easing::{Easing, ParseEasingError};
pub use values::Interpolate;
