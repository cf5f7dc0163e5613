//! Normalized animation position in the closed unit interval.

use std::fmt;

use serde::Serialize;

use crate::error::{FacesError, Result};

/// A value constrained to `[0.0, 1.0]`.
///
/// Used wherever a normalized animation position is needed: eye openness,
/// mouth openness and spectrum indexing. Construction through [`Proportion::new`]
/// never clamps; out-of-range input is an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Proportion(f64);

impl Proportion {
    /// Fully closed / start of strip.
    pub const ZERO: Self = Self(0.0);

    /// Fully open / end of strip.
    pub const ONE: Self = Self(1.0);

    /// Create a proportion, failing if `value` is outside `[0.0, 1.0]` or NaN.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FacesError::OutOfRange { value })
        }
    }

    /// Create a proportion by saturating `value` into `[0.0, 1.0]`.
    ///
    /// Only for producers that compute a value (envelopes, amplitude
    /// sources) and may drift by a rounding error. NaN maps to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// The underlying scalar.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute distance to another proportion.
    pub fn distance(self, other: Proportion) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl Default for Proportion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Proportion {
    type Error = FacesError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
