//! Eye layer drawer - one eye-openness strip per emotion.

use std::collections::HashMap;
use std::path::Path;

use crate::discovery::load_emotion_spectrums;
use crate::types::{ImageSpectrum, Origin, Proportion};

use super::Canvas;

/// Draws the eye frame for an emotion and eye openness.
///
/// Emotion names arrive from an untrusted control surface, so an unknown
/// emotion draws nothing rather than failing the frame.
#[derive(Debug, Clone)]
pub struct EmotionDrawer {
    spectrums: HashMap<String, ImageSpectrum>,
    /// Emotion names in discovery order.
    order: Vec<String>,
    origin: Origin,
}

impl EmotionDrawer {
    /// Create a drawer from `(emotion, spectrum)` pairs.
    ///
    /// Later duplicates of a name replace the spectrum but keep the first
    /// position in the listing.
    pub fn new(spectrums: impl IntoIterator<Item = (String, ImageSpectrum)>, origin: Origin) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();

        for (name, spectrum) in spectrums {
            if map.insert(name.clone(), spectrum).is_none() {
                order.push(name);
            }
        }

        Self {
            spectrums: map,
            order,
            origin,
        }
    }

    /// Load every emotion sub-directory of `dir`.
    pub fn load(dir: &Path, origin: Origin) -> Self {
        let drawer = Self::new(load_emotion_spectrums(dir), origin);
        tracing::info!(emotions = drawer.order.len(), "loaded emotions");
        drawer
    }

    /// The spectrum for `emotion`, if it was loaded.
    pub fn spectrum(&self, emotion: &str) -> Option<&ImageSpectrum> {
        self.spectrums.get(emotion)
    }

    /// Draw the eye frame for `emotion` at `eye_openness`.
    ///
    /// Returns whether an eye layer was drawn.
    pub fn draw(&self, canvas: &mut dyn Canvas, emotion: &str, eye_openness: Proportion) -> bool {
        match self.spectrum(emotion) {
            Some(spectrum) => {
                canvas.draw(spectrum.nearest(eye_openness), self.origin);
                true
            }
            None => false,
        }
    }

    /// Emotions with a loaded spectrum, in discovery order.
    pub fn emotions(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, emotion: &str) -> bool {
        self.spectrums.contains_key(emotion)
    }

    /// The emotion listing served to control clients.
    pub fn emotions_separated_by_newline(&self) -> String {
        self.order.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrameCanvas;
    use crate::types::Bitmap;
    use image::Rgba;

    fn strip(closed: u8, open: u8) -> ImageSpectrum {
        ImageSpectrum::new(
            "eyes",
            vec![
                (Proportion::ZERO, Bitmap::filled(1, 1, Rgba([closed, 0, 0, 255]))),
                (Proportion::ONE, Bitmap::filled(1, 1, Rgba([open, 0, 0, 255]))),
            ],
        )
        .unwrap()
    }

    fn drawer() -> EmotionDrawer {
        EmotionDrawer::new(
            vec![
                ("neutral".to_string(), strip(1, 2)),
                ("happy".to_string(), strip(3, 4)),
            ],
            Origin::new(1, 0),
        )
    }

    #[test]
    fn test_draw_selects_nearest_frame() {
        let drawer = drawer();
        let mut canvas = FrameCanvas::new(2, 1);

        assert!(drawer.draw(&mut canvas, "happy", Proportion::new(0.9).unwrap()));
        assert_eq!(canvas.get(1, 0), Some(Rgba([4, 0, 0, 255])));

        assert!(drawer.draw(&mut canvas, "neutral", Proportion::new(0.1).unwrap()));
        assert_eq!(canvas.get(1, 0), Some(Rgba([1, 0, 0, 255])));
    }

    #[test]
    fn test_unknown_emotion_draws_nothing() {
        let drawer = drawer();
        let mut canvas = FrameCanvas::new(2, 1);

        assert!(!drawer.draw(&mut canvas, "furious", Proportion::ONE));
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_emotions_in_discovery_order() {
        let drawer = drawer();
        assert_eq!(drawer.emotions(), ["neutral", "happy"]);
        assert_eq!(drawer.emotions_separated_by_newline(), "neutral\nhappy");
        assert!(drawer.contains("happy"));
        assert!(!drawer.contains("Happy"));
    }

    #[test]
    fn test_empty_drawer() {
        let drawer = EmotionDrawer::new(Vec::new(), Origin::ZERO);
        assert!(drawer.emotions().is_empty());
        assert_eq!(drawer.emotions_separated_by_newline(), "");
    }

    #[test]
    fn test_duplicate_names_listed_once() {
        let drawer = EmotionDrawer::new(
            vec![
                ("happy".to_string(), strip(1, 1)),
                ("happy".to_string(), strip(9, 9)),
            ],
            Origin::ZERO,
        );
        assert_eq!(drawer.emotions(), ["happy"]);

        let mut canvas = FrameCanvas::new(1, 1);
        drawer.draw(&mut canvas, "happy", Proportion::ZERO);
        assert_eq!(canvas.get(0, 0), Some(Rgba([9, 0, 0, 255])));
    }
}
