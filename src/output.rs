//! # Output Module
//!
//! Presents a rendered [`Canvas`] by writing it to disk. The format is
//! chosen from the file extension:
//! - `.png` for lossless compressed output
//! - `.ppm` for a plain binary pixmap
//! - `.bmp` for uncompressed bitmaps
//!
//! Channels are already clamped to `[0, 255]` by the canvas, so no tone
//! mapping or gamma correction is applied here.

use std::path::Path;

use image::ImageFormat;
use log::info;

use crate::canvas::Canvas;

/// Errors raised while writing an image.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The extension does not name a supported format
    #[error("Unsupported output format '{0}'. Supported extensions: .png, .ppm, .bmp")]
    UnsupportedFormat(String),

    /// Encoding or writing the file failed
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Pick the image format for `path` from its extension.
pub fn output_format(path: &Path) -> Result<ImageFormat, OutputError> {
    let unsupported = || OutputError::UnsupportedFormat(path.display().to_string());

    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Pnm | ImageFormat::Bmp)) => Ok(format),
        _ => Err(unsupported()),
    }
}

/// Save the canvas to `path`.
///
/// # Errors
///
/// Returns [`OutputError::UnsupportedFormat`] for unknown extensions and
/// [`OutputError::Image`] when the file cannot be encoded or written.
pub fn save_canvas<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let format = output_format(path)?;

    let start = std::time::Instant::now();
    canvas.image().save_with_format(path, format)?;
    info!("Image saved as {} in {:.2?}", path.display(), start.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelSink;
    use crate::color::Color;

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(output_format(Path::new("out.png")).unwrap(), ImageFormat::Png);
        assert_eq!(output_format(Path::new("out.ppm")).unwrap(), ImageFormat::Pnm);
        assert_eq!(output_format(Path::new("dir/out.BMP")).unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_unsupported_format() {
        assert!(matches!(output_format(Path::new("out.exr")), Err(OutputError::UnsupportedFormat(_))));
        assert!(matches!(output_format(Path::new("out")), Err(OutputError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_png_round_trips_pixels() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_pixel(0.0, 0.0, Color::new(10, 20, 30));

        let temp_file = std::env::temp_dir().join("phong_tracer_output_test.png");
        save_canvas(&canvas, &temp_file).unwrap();

        let loaded = image::open(&temp_file).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(2, 1).0, [10, 20, 30]);

        let _ = std::fs::remove_file(&temp_file);
    }
}
