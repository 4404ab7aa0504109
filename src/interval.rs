//! Ray parameter ranges.
//!
//! Intersection queries accept hits strictly inside `(min, max)`.

/// Open interval `(min, max)` of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound (exclusive)
    pub min: f64,
    /// Upper bound (exclusive)
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval with no upper bound.
    pub fn unbounded(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Check if the interval surrounds the given value (exclusive bounds).
    ///
    /// NaN is never surrounded.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }
}
