//! Rendering module for faces.
//!
//! This module composites eye, mouth, head and overlay bitmaps onto a
//! canvas and writes frames out as PNG.

mod canvas;
mod emotion;
mod frame;
mod png;
mod renderer;
mod static_image;

pub use canvas::{Canvas, FrameCanvas, BLANK};
pub use emotion::EmotionDrawer;
pub use frame::{FaceLayers, HeadFrameProvider};
pub use png::{scale_frame, write_png};
pub use renderer::Renderer;
pub use static_image::StaticImageDrawer;
