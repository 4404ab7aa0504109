//! Ray representation.
//!
//! A ray is r(t) = origin + t * direction. Directions are kept exactly as
//! given: point-light shadow rays rely on the light sitting at t = 1.

use crate::vector::Vector;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vector,

    /// Direction of the ray. Not required to be normalized.
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f64) -> Vector {
        self.origin + self.direction * t
    }
}
