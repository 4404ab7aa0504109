//! Sphere primitive for ray tracing.
//!
//! Intersection solves `|o + t*d - c|^2 = r^2` as a quadratic in t.

use crate::color::Color;
use crate::ray::Ray;
use crate::vector::Vector;

/// Specular exponent meaning "no highlight".
pub const NO_SPECULAR: f64 = -1.0;

/// Both roots of the ray/sphere quadratic.
///
/// `front` is the root computed with `-sqrt(discriminant)`, which is the
/// nearer one along the ray for any non-degenerate direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Root with the negative square root
    pub front: f64,
    /// Root with the positive square root
    pub back: f64,
}

impl Face {
    /// Roots in the order they are examined by closest-hit queries.
    pub fn roots(&self) -> [f64; 2] {
        [self.front, self.back]
    }
}

/// Sphere primitive with its Phong material parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vector,
    radius_square: f64,
    color: Color,
    specular: Option<f64>,
    reflective: f64,
}

impl Sphere {
    /// Create a matte, non-reflective sphere.
    pub fn new(center: Vector, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius_square: radius * radius,
            color,
            specular: None,
            reflective: 0.0,
        }
    }

    /// Set the Phong specular exponent. [`NO_SPECULAR`] clears it.
    pub fn with_specular(mut self, exponent: f64) -> Self {
        self.specular = (exponent != NO_SPECULAR).then_some(exponent);
        self
    }

    /// Set the mirror reflectivity, expected in `[0, 1]`.
    pub fn with_reflective(mut self, reflective: f64) -> Self {
        self.reflective = reflective;
        self
    }

    /// Center in world coordinates.
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Cached `radius * radius`.
    pub fn radius_square(&self) -> f64 {
        self.radius_square
    }

    /// Surface color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Specular exponent, `None` when the surface has no highlight.
    pub fn specular(&self) -> Option<f64> {
        self.specular
    }

    /// Fraction of the final color taken from the mirror reflection.
    pub fn reflective(&self) -> f64 {
        self.reflective
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vector) -> Vector {
        (point - self.center).normalize()
    }

    /// Intersect a ray with this sphere.
    ///
    /// `d_dot_d` is `dot(direction, direction)`, computed once per query by
    /// the caller. Returns `None` when the discriminant is negative.
    pub fn intersect(&self, ray: &Ray, d_dot_d: f64) -> Option<Face> {
        let oc = ray.origin - self.center;
        let k2 = 2.0 * oc.dot(ray.direction);
        let k3 = oc.dot(oc) - self.radius_square;

        let discriminant = k2 * k2 - 4.0 * d_dot_d * k3;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        Some(Face {
            front: (-k2 - sqrtd) / (2.0 * d_dot_d),
            back: (-k2 + sqrtd) / (2.0 * d_dot_d),
        })
    }
}
