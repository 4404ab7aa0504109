//! 3x3 linear transform used to orient the camera.

use glam::DMat3;

use crate::vector::Vector;

/// Row-major 3x3 matrix.
///
/// `apply(v)` is three dot products of `v` against the rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    rows: [Vector; 3],
}

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Matrix = Matrix {
        rows: [
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(0.0, 0.0, 1.0),
        ],
    };

    /// Build a matrix from its three rows.
    pub fn from_rows(row0: Vector, row1: Vector, row2: Vector) -> Self {
        Self {
            rows: [row0, row1, row2],
        }
    }

    /// Rotation about the vertical axis by `degrees`.
    ///
    /// 45 degrees gives the rows `(c, 0, -s)`, `(0, 1, 0)`, `(s, 0, c)`.
    pub fn rotation_y(degrees: f64) -> Self {
        // glam is column-major: our rows are the columns of its rotation.
        let m = DMat3::from_rotation_y(degrees.to_radians());
        Self::from_rows(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }

    /// Transform a vector.
    pub fn apply(&self, v: Vector) -> Vector {
        Vector::new(v.dot(self.rows[0]), v.dot(self.rows[1]), v.dot(self.rows[2]))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Vector, b: Vector) {
        assert!((a - b).length() < EPS, "{} != {}", a, b);
    }

    #[test]
    fn test_identity_apply() {
        let v = Vector::new(1.5, -2.0, 7.0);
        assert_eq!(Matrix::IDENTITY.apply(v), v);
        assert_eq!(Matrix::default(), Matrix::IDENTITY);
    }

    #[test]
    fn test_apply_is_row_dot_products() {
        let m = Matrix::from_rows(
            Vector::new(1.0, 2.0, 3.0),
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(-1.0, 0.0, 2.0),
        );
        let v = Vector::new(1.0, 1.0, 1.0);
        assert_eq!(m.apply(v), Vector::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_rotation_y_matches_row_layout() {
        let m = Matrix::rotation_y(45.0);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(m.rows[0], Vector::new(s, 0.0, -s));
        assert_close(m.rows[1], Vector::new(0.0, 1.0, 0.0));
        assert_close(m.rows[2], Vector::new(s, 0.0, s));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vector::new(0.3, -0.2, 1.0);
        let r = Matrix::rotation_y(-30.0).apply(v);
        assert!((r.length() - v.length()).abs() < EPS);
    }
}
