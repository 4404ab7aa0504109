//! Integer RGB color.

use crate::vector::Vector;

/// RGB triple with integer channels.
///
/// Channels are nominally in `[0, 255]` but are not clamped here: lighting can
/// push them out of range and the pixel sink clamps on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red channel
    pub red: i32,
    /// Green channel
    pub green: i32,
    /// Blue channel
    pub blue: i32,
}

impl Color {
    /// Black
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Channels as a vector for blending with lighting intensities.
    pub fn to_vector(self) -> Vector {
        Vector::new(self.red as f64, self.green as f64, self.blue as f64)
    }

    /// Channels clamped into the displayable `[0, 255]` range.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            self.red.clamp(0, 255) as u8,
            self.green.clamp(0, 255) as u8,
            self.blue.clamp(0, 255) as u8,
        ]
    }
}

/// Truncates each component toward zero. NaN becomes 0 and infinities
/// saturate to the `i32` range.
impl From<Vector> for Color {
    fn from(v: Vector) -> Self {
        Self::new(v.x() as i32, v.y() as i32, v.z() as i32)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as i32, g as i32, b as i32)
    }
}
