//! Fixed overlay drawer (nose).

use std::path::Path;

use crate::discovery::load_bitmap;
use crate::error::Result;
use crate::types::{Bitmap, Origin};

use super::Canvas;

/// Draws one image at a fixed origin, every frame.
#[derive(Debug, Clone)]
pub struct StaticImageDrawer {
    image: Bitmap,
    origin: Origin,
}

impl StaticImageDrawer {
    pub fn new(image: Bitmap, origin: Origin) -> Self {
        Self { image, origin }
    }

    /// Load the overlay image. Fails if it cannot be decoded.
    pub fn load(path: &Path, origin: Origin) -> Result<Self> {
        Ok(Self::new(load_bitmap(path)?, origin))
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw(&self.image, self.origin);
    }
}
