//! Core domain types for faces.
//!
//! - `Proportion` - validated scalar in `[0.0, 1.0]`
//! - `Bitmap` / `Origin` - shared pixel buffers and where layers are placed
//! - `ImageSpectrum` - frames indexed by proportion

mod bitmap;
mod proportion;
mod spectrum;

pub use bitmap::{Bitmap, Origin};
pub use proportion::Proportion;
pub use spectrum::ImageSpectrum;
