//! The face app as seen by a display host.
//!
//! The host loads the app once, flips it active when it is shown and calls
//! [`FacesApp::render`] at [`FacesApp::frame_rate`]. Everything else (blink,
//! mouth, control commands) feeds the shared state in the background.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::animation::{Animator, ProportionProvider};
use crate::control::ControlSurface;
use crate::discovery::{FacesConfig, Resolution};
use crate::error::Result;
use crate::render::{Canvas, Renderer};
use crate::state::ExpressionState;

/// Display name of the app.
pub const APP_NAME: &str = "Faces";

/// Short description shown by hosts.
pub const APP_DESCRIPTION: &str =
    "Displays faces and moves the mouth from an audio level, driven by a control surface.";

/// A running face: renderer, shared state and animation drivers.
pub struct FacesApp {
    config: FacesConfig,
    renderer: Renderer,
    state: Arc<ExpressionState>,
    active: Arc<AtomicBool>,
    animator: Animator,
}

impl FacesApp {
    /// Load assets relative to `root` and start the animation drivers.
    ///
    /// The app starts inactive; drivers tick but do not write until
    /// [`FacesApp::set_active`] is called.
    pub fn initialize(
        config: FacesConfig,
        root: &Path,
        mouth: Arc<dyn ProportionProvider>,
    ) -> Result<Self> {
        tracing::info!(root = %root.display(), "initializing faces");

        let renderer = Renderer::load(&config.asset_paths(root), &config.layout)?;
        Self::with_renderer(config, renderer, mouth)
    }

    /// Start the app around an already built renderer.
    pub fn with_renderer(
        config: FacesConfig,
        renderer: Renderer,
        mouth: Arc<dyn ProportionProvider>,
    ) -> Result<Self> {
        config.validate()?;

        let state = Arc::new(ExpressionState::new(config.default_emotion.clone()));
        let active = Arc::new(AtomicBool::new(false));
        let animator = Animator::spawn(
            Arc::clone(&state),
            Arc::clone(&active),
            mouth,
            config.frame_period(),
            config.blink,
        )?;

        tracing::info!(
            emotions = renderer.emotion_drawer().emotions().len(),
            "faces initialized"
        );

        Ok(Self {
            config,
            renderer,
            state,
            active,
            animator,
        })
    }

    /// Gate the animation drivers.
    pub fn set_active(&self, active: bool) {
        tracing::info!(active, "faces set active");
        self.active.store(active, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Draw the current state onto `canvas`.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.renderer.render(&self.state, canvas);
    }

    pub fn frame_rate(&self) -> f32 {
        self.config.frame_rate
    }

    pub fn supported_resolutions(&self) -> Vec<Resolution> {
        vec![self.config.resolution]
    }

    pub fn state(&self) -> &Arc<ExpressionState> {
        &self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn config(&self) -> &FacesConfig {
        &self.config
    }

    pub fn control(&self) -> ControlSurface<'_> {
        ControlSurface::new(&self.state, self.renderer.emotion_drawer())
    }

    /// Stop the animation drivers. Rendering keeps working.
    pub fn shutdown(&mut self) {
        self.active.store(false, Ordering::Release);
        self.animator.stop();
    }
}
