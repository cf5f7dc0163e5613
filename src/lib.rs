//! faces - Layered LED face compositor
//!
//! Draws an animated face onto a small LED canvas from a head image, an
//! overlay, a mouth strip and one eye strip per emotion. Eye and mouth
//! openness pick the nearest frame from each strip; a blink driver and a
//! mouth level provider move them over time while a control surface
//! switches emotions and blanks the display.

pub mod animation;
pub mod app;
pub mod cli;
pub mod control;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod state;
pub mod types;

pub use animation::{Animator, ConstantLevel, Oscillator, ProportionProvider, SharedLevel};
pub use app::FacesApp;
pub use control::{Command, ControlSurface, Response};
pub use discovery::{discover, AssetPaths, Discovery, FacesConfig, Layout, Resolution};
pub use error::{FacesError, Result};
pub use render::{write_png, Canvas, EmotionDrawer, FrameCanvas, Renderer, StaticImageDrawer};
pub use state::{ExpressionSnapshot, ExpressionState};
pub use types::{Bitmap, ImageSpectrum, Origin, Proportion};
