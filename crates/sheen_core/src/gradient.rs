//! Renderer-neutral gradient descriptions
//!
//! A [`Gradient`] is what a platform renderer consumes: a shape, two
//! normalized endpoints and an ordered list of color stops. Sheen never
//! paints anything itself.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Color, Point};

/// Shape of a gradient
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Varies along the axis from start to end. Every point on a line
    /// perpendicular to the axis has the same color.
    #[default]
    #[serde(alias = "axial")]
    Linear,
    /// Ellipse centered at start, with width `(end.x - start.x) * 2` and
    /// height `(end.y - start.y) * 2`.
    Radial,
    /// Centered at start; the 0-degree direction points from start to end
    /// and angles grow from the positive x-axis towards the positive y-axis.
    /// Undefined when start and end overlap.
    Conic,
}

impl GradientKind {
    /// Axial is the platform name for a linear gradient
    pub const AXIAL: GradientKind = GradientKind::Linear;
}

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Gradient type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Gradient {
    /// Linear gradient between two points
    Linear {
        start: Point,
        end: Point,
        /// Color stops sorted by offset
        stops: Vec<GradientStop>,
    },
    /// Radial gradient from center outward
    Radial {
        center: Point,
        /// Corner of the bounding box of the ellipse
        end: Point,
        /// Color stops sorted by offset
        stops: Vec<GradientStop>,
    },
    /// Conic/angular gradient around a center point
    Conic {
        center: Point,
        /// Point that fixes the 0-degree direction
        end: Point,
        /// Color stops sorted by offset
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a gradient of the given kind from explicit stops
    pub fn new(kind: GradientKind, start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        match kind {
            GradientKind::Linear => Gradient::Linear { start, end, stops },
            GradientKind::Radial => Gradient::Radial {
                center: start,
                end,
                stops,
            },
            GradientKind::Conic => Gradient::Conic {
                center: start,
                end,
                stops,
            },
        }
    }

    /// Create a gradient whose stops are `colors` spread uniformly from
    /// offset 0 to offset 1. Stop colors are normalized to RGBA.
    pub fn with_even_stops(kind: GradientKind, start: Point, end: Point, colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops: Vec<GradientStop> = colors
            .iter()
            .enumerate()
            .map(|(index, color)| GradientStop::new(index as f32 / last, color.to_rgba()))
            .collect();

        debug!(?kind, stops = stops.len(), "built gradient with even stops");
        Self::new(kind, start, end, stops)
    }

    pub fn kind(&self) -> GradientKind {
        match self {
            Gradient::Linear { .. } => GradientKind::Linear,
            Gradient::Radial { .. } => GradientKind::Radial,
            Gradient::Conic { .. } => GradientKind::Conic,
        }
    }

    /// Start point (the center for radial and conic gradients)
    pub fn start(&self) -> Point {
        match self {
            Gradient::Linear { start, .. } => *start,
            Gradient::Radial { center, .. } | Gradient::Conic { center, .. } => *center,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Gradient::Linear { end, .. }
            | Gradient::Radial { end, .. }
            | Gradient::Conic { end, .. } => *end,
        }
    }

    /// Get the gradient stops
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Radial { stops, .. } => stops,
            Gradient::Conic { stops, .. } => stops,
        }
    }
}
