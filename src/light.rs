//! Light sources.

use crate::interval::Interval;
use crate::vector::Vector;

/// Minimum shadow-ray parameter, keeps a lit point from shadowing itself.
pub const SHADOW_EPSILON: f64 = 0.001;

/// Light source kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light reaching every point.
    Ambient {
        /// Light intensity
        intensity: f64,
    },
    /// Light radiating from a position.
    Point {
        /// Light intensity
        intensity: f64,
        /// World position of the light
        position: Vector,
    },
    /// Light arriving from a fixed direction.
    Directional {
        /// Light intensity
        intensity: f64,
        /// Direction pointing towards the light
        direction: Vector,
    },
}

impl Light {
    /// Intensity of the light, whatever its kind.
    pub fn intensity(&self) -> f64 {
        match self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => *intensity,
        }
    }

    /// Unnormalized vector from `point` towards the light.
    ///
    /// `None` for ambient light. For point lights the light sits at exactly
    /// t = 1 along the returned vector.
    pub fn vector_to(&self, point: Vector) -> Option<Vector> {
        match self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some(*position - point),
            Light::Directional { direction, .. } => Some(*direction),
        }
    }

    /// Parameter range a shadow ray must search for occluders.
    pub fn shadow_range(&self) -> Interval {
        match self {
            Light::Point { .. } => Interval::new(SHADOW_EPSILON, 1.0),
            Light::Ambient { .. } | Light::Directional { .. } => Interval::unbounded(SHADOW_EPSILON),
        }
    }
}
