//! Pixel sinks: where traced colors end up.

use image::{Rgb, RgbImage};

use crate::color::Color;

/// Destination for traced pixels.
///
/// Coordinates are device-pixel offsets from the image center, x to the
/// right and y up. Writes outside the surface are silently dropped.
pub trait PixelSink {
    /// Store `color` at the given center-relative coordinates.
    fn put_pixel(&mut self, screen_x: f64, screen_y: f64, color: Color);

    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;
}

/// In-memory 8-bit RGB surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a black canvas. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Stored value at top-left based storage coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// The accumulated image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Convert center-relative coordinates into storage coordinates.
    ///
    /// Row `(H - 1) / 2` holds `screen_y == 0`, so every row of an odd-height
    /// surface is reachable from the inclusive `-H/2 ..= H/2` scan.
    fn storage_coordinates(&self, screen_x: f64, screen_y: f64) -> Option<(u32, u32)> {
        let x = (self.width() / 2) as f64 + screen_x;
        let y = ((self.height() - 1) / 2) as f64 - screen_y;

        if x < 0.0 || x >= self.width() as f64 || y < 0.0 || y >= self.height() as f64 {
            return None;
        }
        Some((x as u32, y as u32))
    }
}

impl PixelSink for Canvas {
    fn put_pixel(&mut self, screen_x: f64, screen_y: f64, color: Color) {
        if let Some((x, y)) = self.storage_coordinates(screen_x, screen_y) {
            self.image.put_pixel(x, y, Rgb(color.to_rgb8()));
        }
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }
}
