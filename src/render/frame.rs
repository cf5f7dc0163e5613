//! Head frame compositor.
//!
//! Layers are drawn bottom to top: head silhouette, mouth, eyes, static
//! overlay. Each layer overwrites the one below wherever it is opaque, so the
//! order is part of the output contract. A blank frame skips every layer.

use crate::state::ExpressionSnapshot;
use crate::types::{Bitmap, ImageSpectrum, Origin};

use super::{Canvas, EmotionDrawer, StaticImageDrawer};

/// Layers that the compositor draws with.
#[derive(Debug, Clone, Copy)]
pub struct FaceLayers<'a> {
    pub emotions: &'a EmotionDrawer,
    /// `None` when no mouth strip loaded.
    pub mouth: Option<&'a ImageSpectrum>,
    pub overlay: &'a StaticImageDrawer,
}

/// Composites a full head frame from an expression.
#[derive(Debug, Clone)]
pub struct HeadFrameProvider {
    head: Bitmap,
    head_origin: Origin,
    mouth_origin: Origin,
}

impl HeadFrameProvider {
    pub fn new(head: Bitmap, head_origin: Origin, mouth_origin: Origin) -> Self {
        Self {
            head,
            head_origin,
            mouth_origin,
        }
    }

    /// Draw one frame for `expression` onto `canvas`.
    pub fn draw(&self, canvas: &mut dyn Canvas, expression: &ExpressionSnapshot, layers: FaceLayers<'_>) {
        canvas.clear();

        if expression.blank {
            return;
        }

        canvas.draw(&self.head, self.head_origin);
        match layers.mouth {
            Some(mouth) => canvas.draw(mouth.nearest(expression.mouth_openness), self.mouth_origin),
            None => tracing::trace!("no mouth strip, mouth layer skipped"),
        }
        if !layers
            .emotions
            .draw(canvas, &expression.emotion, expression.eye_openness)
        {
            tracing::trace!(emotion = %expression.emotion, "unknown emotion, eye layer skipped");
        }
        layers.overlay.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FrameCanvas;
    use crate::types::Proportion;
    use image::{Rgba, RgbaImage};

    const HEAD: Rgba<u8> = Rgba([10, 10, 10, 255]);
    const MOUTH: Rgba<u8> = Rgba([20, 0, 0, 255]);
    const EYES: Rgba<u8> = Rgba([0, 30, 0, 255]);
    const NOSE: Rgba<u8> = Rgba([0, 0, 40, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    struct Fixture {
        provider: HeadFrameProvider,
        emotions: EmotionDrawer,
        mouth: ImageSpectrum,
        overlay: StaticImageDrawer,
    }

    impl Fixture {
        /// 4x1 canvas: mouth covers x 0..3, eyes cover x 1..4, nose covers x 2.
        fn new() -> Self {
            let mut nose = RgbaImage::from_pixel(3, 1, CLEAR);
            nose.put_pixel(2, 0, NOSE);

            Self {
                provider: HeadFrameProvider::new(Bitmap::filled(4, 1, HEAD), Origin::ZERO, Origin::ZERO),
                emotions: EmotionDrawer::new(
                    vec![(
                        "happy".to_string(),
                        ImageSpectrum::new("happy", vec![(Proportion::ONE, Bitmap::filled(3, 1, EYES))])
                            .unwrap(),
                    )],
                    Origin::new(1, 0),
                ),
                mouth: ImageSpectrum::new("mouth", vec![(Proportion::ZERO, Bitmap::filled(3, 1, MOUTH))])
                    .unwrap(),
                overlay: StaticImageDrawer::new(Bitmap::new(nose), Origin::ZERO),
            }
        }

        fn render(&self, expression: &ExpressionSnapshot) -> FrameCanvas {
            let mut canvas = FrameCanvas::new(4, 1);
            let layers = FaceLayers {
                emotions: &self.emotions,
                mouth: Some(&self.mouth),
                overlay: &self.overlay,
            };
            self.provider.draw(&mut canvas, expression, layers);
            canvas
        }
    }

    fn expression(emotion: &str, blank: bool) -> ExpressionSnapshot {
        ExpressionSnapshot {
            emotion: emotion.to_string(),
            eye_openness: Proportion::ONE,
            mouth_openness: Proportion::ZERO,
            blank,
        }
    }

    #[test]
    fn test_layer_order() {
        let canvas = Fixture::new().render(&expression("happy", false));

        assert_eq!(canvas.get(0, 0), Some(MOUTH)); // mouth over head
        assert_eq!(canvas.get(1, 0), Some(EYES)); // eyes over mouth
        assert_eq!(canvas.get(2, 0), Some(NOSE)); // overlay over everything
        assert_eq!(canvas.get(3, 0), Some(EYES)); // eyes over head
    }

    #[test]
    fn test_blank_draws_nothing() {
        let fixture = Fixture::new();
        let canvas = fixture.render(&expression("happy", true));
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_blank_clears_previous_frame() {
        let fixture = Fixture::new();
        let mut canvas = fixture.render(&expression("happy", false));
        let layers = FaceLayers {
            emotions: &fixture.emotions,
            mouth: Some(&fixture.mouth),
            overlay: &fixture.overlay,
        };

        fixture
            .provider
            .draw(&mut canvas, &expression("happy", true), layers);

        assert!(canvas.is_blank());
    }

    #[test]
    fn test_unknown_emotion_skips_eyes_only() {
        let canvas = Fixture::new().render(&expression("nonexistent", false));

        assert_eq!(canvas.get(0, 0), Some(MOUTH));
        assert_eq!(canvas.get(1, 0), Some(MOUTH));
        assert_eq!(canvas.get(2, 0), Some(NOSE));
        assert_eq!(canvas.get(3, 0), Some(HEAD));
    }

    #[test]
    fn test_missing_mouth_skips_mouth_only() {
        let fixture = Fixture::new();
        let mut canvas = FrameCanvas::new(4, 1);
        let layers = FaceLayers {
            emotions: &fixture.emotions,
            mouth: None,
            overlay: &fixture.overlay,
        };

        fixture
            .provider
            .draw(&mut canvas, &expression("happy", false), layers);

        assert_eq!(canvas.get(0, 0), Some(HEAD));
        assert_eq!(canvas.get(1, 0), Some(EYES));
        assert_eq!(canvas.get(2, 0), Some(NOSE));
    }
}
