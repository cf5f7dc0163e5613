//! Blink envelope.
//!
//! Eye openness over one cycle:
//!
//! ```text
//!  1.0 |**********       *
//!      |          *     *
//!      |           *   *
//!      |            * *
//!  0.0 |-------------*----------> t
//!      0        start mid end
//! ```
//!
//! The cycle position comes from wall-clock time, so the blink is phase
//! locked to the clock rather than to a counter.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{FacesError, Result};
use crate::types::Proportion;

/// Timing of the blink envelope, in seconds. The cycle length is `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkTiming {
    /// Eyes start closing.
    pub start: f64,
    /// Eyes are open again; also the cycle length.
    pub end: f64,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            start: 4.3,
            end: 5.0,
        }
    }
}

impl BlinkTiming {
    /// Eyes fully closed.
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn validate(&self) -> Result<()> {
        let finite = self.start.is_finite() && self.end.is_finite();
        if !finite || self.start < 0.0 || self.start >= self.end {
            return Err(FacesError::Validation {
                message: format!(
                    "blink timing needs 0 <= start < end, got start {} end {}",
                    self.start, self.end
                ),
                help: Some("The defaults are start: 4.3, end: 5.0".to_string()),
            });
        }
        Ok(())
    }
}

/// Map `value` from `[min, max]` onto `[0, 1]`.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Eye openness at cycle position `t` seconds.
pub fn blink_openness(t: f64, timing: &BlinkTiming) -> Proportion {
    let (start, mid, end) = (timing.start, timing.mid(), timing.end);

    if t < start {
        Proportion::ONE
    } else if t <= mid {
        Proportion::clamped(lerp(1.0, 0.0, normalize(t, start, mid)))
    } else if t <= end {
        Proportion::clamped(lerp(0.0, 1.0, normalize(t, mid, end)))
    } else {
        Proportion::ONE
    }
}

/// Position of `now` within the blink cycle, in seconds.
pub fn cycle_position(now: SystemTime, timing: &BlinkTiming) -> f64 {
    let millis = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (millis as f64 / 1000.0) % timing.end
}
