//! Normalized geometry
//!
//! Gradient endpoints live in the unit square of the surface being painted:
//! `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.

use serde::{Deserialize, Serialize};

/// 2D point in normalized coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const TOP_LEFT: Point = Point::new(0.0, 0.0);
    pub const TOP: Point = Point::new(0.5, 0.0);
    pub const TOP_RIGHT: Point = Point::new(1.0, 0.0);

    pub const LEFT: Point = Point::new(0.0, 0.5);
    pub const CENTER: Point = Point::new(0.5, 0.5);
    pub const RIGHT: Point = Point::new(1.0, 0.5);

    pub const BOTTOM_LEFT: Point = Point::new(0.0, 1.0);
    pub const BOTTOM: Point = Point::new(0.5, 1.0);
    pub const BOTTOM_RIGHT: Point = Point::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
