//! PNG output for rendered frames.
//!
//! LED panels are tiny, so frames are written with optional integer
//! nearest-neighbour upscaling for previewing on a monitor.

use std::path::Path;

use image::RgbaImage;

use crate::error::{FacesError, Result};

use super::FrameCanvas;

/// Scale a frame by an integer factor (nearest neighbour).
pub fn scale_frame(pixels: &RgbaImage, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    if scale == 1 {
        return pixels.clone();
    }

    let mut scaled = RgbaImage::new(pixels.width() * scale, pixels.height() * scale);

    for (x, y, pixel) in pixels.enumerate_pixels() {
        // Fill scaled pixels
        for sy in 0..scale {
            for sx in 0..scale {
                scaled.put_pixel(x * scale + sx, y * scale + sy, *pixel);
            }
        }
    }

    scaled
}

/// Write a rendered frame to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The frame to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (0 and 1 = no scaling)
pub fn write_png(canvas: &FrameCanvas, path: &Path, scale: u32) -> Result<()> {
    let img = scale_frame(canvas.pixels(), scale);

    img.save(path).map_err(|e| FacesError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Canvas;
    use crate::types::{Bitmap, Origin};
    use image::Rgba;
    use tempfile::tempdir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_write_png_simple() {
        let mut canvas = FrameCanvas::new(2, 2);
        canvas.draw(&Bitmap::filled(1, 1, RED), Origin::new(1, 0));

        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&canvas, &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_write_png_scaled() {
        let mut canvas = FrameCanvas::new(2, 1);
        canvas.draw(&Bitmap::filled(1, 1, RED), Origin::ZERO);

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&canvas, &path, 2).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_scale_zero_treated_as_one() {
        let canvas = FrameCanvas::new(3, 1);
        assert_eq!(scale_frame(canvas.pixels(), 0).dimensions(), (3, 1));
    }

    #[test]
    fn test_write_png_bad_path() {
        let canvas = FrameCanvas::new(1, 1);
        let result = write_png(&canvas, Path::new("/nonexistent/dir/frame.png"), 1);
        assert!(matches!(result, Err(FacesError::Io { .. })));
    }
}
