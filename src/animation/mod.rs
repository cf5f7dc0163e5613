//! Autonomous animation: blink envelope, mouth amplitude sources and the
//! threads that feed them into the expression state.

mod blink;
mod driver;
mod provider;

pub use blink::{blink_openness, cycle_position, BlinkTiming};
pub use driver::{Animator, Ticker};
pub use provider::{ConstantLevel, Oscillator, ProportionProvider, SharedLevel};
