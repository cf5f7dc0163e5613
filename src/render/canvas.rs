//! Output surface abstraction and the in-memory frame buffer.

use image::{Rgba, RgbaImage};

use crate::types::{Bitmap, Origin};

/// Colour of an unlit pixel.
pub const BLANK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A surface that frames are composited onto.
///
/// The pixel format and flushing to hardware belong to the implementor;
/// the compositor only places bitmaps and clears.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Draw `bitmap` with its top-left corner at `origin`.
    ///
    /// Pixels that are fully transparent leave the destination untouched;
    /// every other pixel overwrites it. Drawing is clipped to the canvas.
    fn draw(&mut self, bitmap: &Bitmap, origin: Origin);

    /// Reset every pixel to the blank (off) representation.
    fn clear(&mut self);
}

/// In-memory RGBA canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCanvas {
    pixels: RgbaImage,
}

impl FrameCanvas {
    /// A blank canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, BLANK),
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// True if every pixel is blank.
    pub fn is_blank(&self) -> bool {
        self.pixels.pixels().all(|p| *p == BLANK)
    }
}

impl Canvas for FrameCanvas {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn draw(&mut self, bitmap: &Bitmap, origin: Origin) {
        blit(&mut self.pixels, bitmap, origin);
    }

    fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = BLANK;
        }
    }
}

/// Copy source pixels onto destination at offset, skipping transparent pixels.
fn blit(dest: &mut RgbaImage, source: &Bitmap, origin: Origin) {
    let (dest_w, dest_h) = dest.dimensions();

    for (sx, sy, pixel) in source.pixels().enumerate_pixels() {
        let (Some(dx), Some(dy)) = (origin.x.checked_add(sx), origin.y.checked_add(sy)) else {
            continue;
        };
        if dx >= dest_w || dy >= dest_h {
            continue;
        }
        if pixel.0[3] > 0 {
            dest.put_pixel(dx, dy, *pixel);
        }
    }
}
