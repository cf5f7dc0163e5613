//! Shared expression state.
//!
//! Written by the blink driver, the mouth driver and the control surface,
//! read by the renderer once per frame. Every field is synchronized on its
//! own so a burst of mouth writes never stalls an emotion change:
//!
//! ```text
//!   blink driver ──► eye_openness   (AtomicU64, f64 bits)
//!   mouth driver ──► mouth_openness (AtomicU64, f64 bits)
//!   control      ──► emotion        (RwLock<String>)
//!   control      ──► blank          (AtomicBool)
//! ```
//!
//! Reads of one field never observe a partial write to that field. Reads
//! of different fields are not taken atomically as a group.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;

use crate::types::Proportion;

/// A proportion stored as the bit pattern of its `f64`.
#[derive(Debug)]
struct AtomicProportion(AtomicU64);

impl AtomicProportion {
    fn new(value: Proportion) -> Self {
        Self(AtomicU64::new(value.value().to_bits()))
    }

    fn load(&self) -> Proportion {
        // Only validated proportions are ever stored.
        Proportion::clamped(f64::from_bits(self.0.load(Ordering::Acquire)))
    }

    fn store(&self, value: Proportion) {
        self.0.store(value.value().to_bits(), Ordering::Release);
    }
}

/// The concurrently shared face state.
#[derive(Debug)]
pub struct ExpressionState {
    emotion: RwLock<String>,
    eye_openness: AtomicProportion,
    mouth_openness: AtomicProportion,
    blank: AtomicBool,
}

/// Field values read from an [`ExpressionState`] for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionSnapshot {
    pub emotion: String,
    pub eye_openness: Proportion,
    pub mouth_openness: Proportion,
    pub blank: bool,
}

impl ExpressionState {
    /// Eyes open, mouth closed, not blank.
    pub fn new(emotion: impl Into<String>) -> Self {
        Self {
            emotion: RwLock::new(emotion.into()),
            eye_openness: AtomicProportion::new(Proportion::ONE),
            mouth_openness: AtomicProportion::new(Proportion::ZERO),
            blank: AtomicBool::new(false),
        }
    }

    pub fn emotion(&self) -> String {
        self.emotion.read().clone()
    }

    /// Store any emotion name; unknown names are resolved at draw time.
    pub fn set_emotion(&self, emotion: impl Into<String>) {
        *self.emotion.write() = emotion.into();
    }

    pub fn eye_openness(&self) -> Proportion {
        self.eye_openness.load()
    }

    pub fn set_eye_openness(&self, value: Proportion) {
        self.eye_openness.store(value);
    }

    pub fn mouth_openness(&self) -> Proportion {
        self.mouth_openness.load()
    }

    pub fn set_mouth_openness(&self, value: Proportion) {
        self.mouth_openness.store(value);
    }

    pub fn blank(&self) -> bool {
        self.blank.load(Ordering::Acquire)
    }

    pub fn set_blank(&self, blank: bool) {
        self.blank.store(blank, Ordering::Release);
    }

    /// Read each field once.
    pub fn snapshot(&self) -> ExpressionSnapshot {
        ExpressionSnapshot {
            emotion: self.emotion(),
            eye_openness: self.eye_openness(),
            mouth_openness: self.mouth_openness(),
            blank: self.blank(),
        }
    }
}

impl Default for ExpressionState {
    fn default() -> Self {
        Self::new("neutral")
    }
}
