//! Top-level renderer owning every face layer.

use crate::discovery::{load_bitmap, load_spectrum, AssetPaths, Layout};
use crate::error::Result;
use crate::state::{ExpressionSnapshot, ExpressionState};
use crate::types::{Bitmap, ImageSpectrum};

use super::{Canvas, EmotionDrawer, FaceLayers, HeadFrameProvider, StaticImageDrawer};

/// Produces frames from the shared expression state.
///
/// Rendering borrows the renderer immutably and the canvas mutably, so two
/// renders can never target the same canvas at once and renders on separate
/// canvases need no lock.
#[derive(Debug, Clone)]
pub struct Renderer {
    emotion_drawer: EmotionDrawer,
    static_drawer: StaticImageDrawer,
    mouth_images: Option<ImageSpectrum>,
    provider: HeadFrameProvider,
}

impl Renderer {
    pub fn new(
        emotion_drawer: EmotionDrawer,
        mouth_images: Option<ImageSpectrum>,
        static_drawer: StaticImageDrawer,
        head: Bitmap,
        layout: &Layout,
    ) -> Self {
        Self {
            emotion_drawer,
            static_drawer,
            mouth_images,
            provider: HeadFrameProvider::new(head, layout.head, layout.mouth),
        }
    }

    /// Load every layer from disk.
    ///
    /// The head and overlay images are required. Emotions and the mouth strip
    /// load fail-soft: a missing or empty directory leaves that layer out.
    pub fn load(paths: &AssetPaths, layout: &Layout) -> Result<Self> {
        let emotion_drawer = EmotionDrawer::load(&paths.eyes, layout.eyes);
        let mouth_images = match load_spectrum(&paths.mouth) {
            Ok(spectrum) => Some(spectrum),
            Err(e) => {
                tracing::warn!(error = %e, "mouth strip unusable, mouth will not be drawn");
                None
            }
        };
        let static_drawer = StaticImageDrawer::load(&paths.overlay, layout.overlay)?;
        let head = load_bitmap(&paths.head)?;

        tracing::info!(
            mouth_frames = mouth_images.as_ref().map_or(0, ImageSpectrum::len),
            "renderer loaded"
        );

        Ok(Self::new(emotion_drawer, mouth_images, static_drawer, head, layout))
    }

    /// Render the current state onto `canvas`.
    ///
    /// Each field is read independently; the frame may mix values written
    /// a few milliseconds apart.
    pub fn render(&self, state: &ExpressionState, canvas: &mut dyn Canvas) {
        self.render_snapshot(&state.snapshot(), canvas);
    }

    /// Render an explicit expression onto `canvas`.
    pub fn render_snapshot(&self, expression: &ExpressionSnapshot, canvas: &mut dyn Canvas) {
        let layers = FaceLayers {
            emotions: &self.emotion_drawer,
            mouth: self.mouth_images.as_ref(),
            overlay: &self.static_drawer,
        };
        self.provider.draw(canvas, expression, layers);
    }

    pub fn emotion_drawer(&self) -> &EmotionDrawer {
        &self.emotion_drawer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrameCanvas;
    use crate::types::{Origin, Proportion};
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn save(path: &Path, colour: [u8; 4]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(2, 2, Rgba(colour)).save(path).unwrap();
    }

    fn paths(root: &Path) -> AssetPaths {
        AssetPaths {
            eyes: root.join("eyes"),
            mouth: root.join("mouth"),
            overlay: root.join("static/nose.png"),
            head: root.join("static/head.png"),
        }
    }

    #[test]
    fn test_load_and_render() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        save(&root.join("eyes/happy/0.0.png"), [1, 0, 0, 255]);
        save(&root.join("eyes/happy/1.0.png"), [2, 0, 0, 255]);
        save(&root.join("mouth/0.0.png"), [3, 0, 0, 255]);
        save(&root.join("static/nose.png"), [0, 0, 0, 0]);
        save(&root.join("static/head.png"), [4, 0, 0, 255]);

        let layout = Layout {
            mouth: Origin::new(0, 2),
            ..Layout::default()
        };
        let renderer = Renderer::load(&paths(root), &layout).unwrap();
        assert_eq!(renderer.emotion_drawer().emotions(), ["happy"]);

        let state = ExpressionState::new("happy");
        state.set_eye_openness(Proportion::ONE);

        let mut canvas = FrameCanvas::new(2, 4);
        renderer.render(&state, &mut canvas);

        assert_eq!(canvas.get(0, 0), Some(Rgba([2, 0, 0, 255])));
        assert_eq!(canvas.get(0, 3), Some(Rgba([3, 0, 0, 255])));
    }

    #[test]
    fn test_load_without_mouth_strip_still_renders() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        save(&root.join("eyes/happy/1.0.png"), [2, 0, 0, 255]);
        save(&root.join("static/nose.png"), [5, 0, 0, 255]);
        save(&root.join("static/head.png"), [4, 0, 0, 255]);

        let layout = Layout {
            eyes: Origin::new(0, 1),
            overlay: Origin::new(0, 3),
            ..Layout::default()
        };
        let renderer = Renderer::load(&paths(root), &layout).unwrap();

        let mut canvas = FrameCanvas::new(2, 5);
        renderer.render(&ExpressionState::new("happy"), &mut canvas);

        assert_eq!(canvas.get(0, 0), Some(Rgba([4, 0, 0, 255])));
        assert_eq!(canvas.get(0, 1), Some(Rgba([2, 0, 0, 255])));
        assert_eq!(canvas.get(0, 3), Some(Rgba([5, 0, 0, 255])));
        assert_eq!(canvas.get(0, 4), Some(Rgba([5, 0, 0, 255])));
    }

    #[test]
    fn test_load_requires_head() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        save(&root.join("mouth/0.0.png"), [3, 0, 0, 255]);
        save(&root.join("static/nose.png"), [0, 0, 0, 0]);

        assert!(Renderer::load(&paths(root), &Layout::default()).is_err());
    }

    #[test]
    fn test_load_without_emotions_still_renders() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        save(&root.join("mouth/0.0.png"), [3, 0, 0, 255]);
        save(&root.join("static/nose.png"), [0, 0, 0, 0]);
        save(&root.join("static/head.png"), [4, 0, 0, 255]);

        let renderer = Renderer::load(&paths(root), &Layout::default()).unwrap();
        assert!(renderer.emotion_drawer().emotions().is_empty());

        let mut canvas = FrameCanvas::new(2, 2);
        renderer.render(&ExpressionState::default(), &mut canvas);
        assert_eq!(canvas.get(1, 1), Some(Rgba([3, 0, 0, 255])));
    }
}
