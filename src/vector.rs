//! Three-component vector used for points, directions and color arithmetic.
//!
//! Wraps `glam::DVec3` so that the tracer works in double precision while
//! keeping the small algebra surface the renderer actually needs.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;

/// Immutable 3D vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(DVec3);

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector(DVec3::ZERO);

    /// Create a vector from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Create a vector in the z = 0 plane.
    ///
    /// Used for device-space pixel offsets before they are projected.
    pub const fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Dot product of two vectors.
    pub fn dot(&self, other: Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Euclidean length, `sqrt(dot(self, self))`.
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Scale to unit length.
    ///
    /// A zero-length vector produces non-finite components; callers are
    /// expected not to normalize degenerate vectors.
    pub fn normalize(&self) -> Vector {
        *self * (1.0 / self.length())
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        Vector(self.0 * k)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
