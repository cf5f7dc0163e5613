//! Periodic animation drivers.
//!
//! Two free-running threads write into the shared [`ExpressionState`] at the
//! frame rate: one follows the blink envelope, one samples the mouth
//! amplitude. While the shared `active` flag is false they skip their work
//! but keep ticking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant, SystemTime};

use crate::error::Result;
use crate::state::ExpressionState;

use super::{blink_openness, cycle_position, BlinkTiming, ProportionProvider};

/// Sleeps until the next tick of a fixed period.
///
/// Deadlines advance by the period rather than by the time slept, so slow
/// ticks do not accumulate drift. A tick that overruns resets the schedule.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the next deadline.
    pub fn wait(&mut self) {
        self.next += self.period;
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        } else {
            self.next = now;
        }
    }
}

/// Handles to the blink and mouth threads.
///
/// Dropping the animator stops and joins both threads.
#[derive(Debug)]
pub struct Animator {
    stop: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl Animator {
    /// Spawn the blink and mouth drivers.
    pub fn spawn(
        state: Arc<ExpressionState>,
        active: Arc<AtomicBool>,
        mouth: Arc<dyn ProportionProvider>,
        period: Duration,
        blink: BlinkTiming,
    ) -> Result<Self> {
        // Built up in place: if a later spawn fails, dropping `animator`
        // stops and joins the threads already running.
        let mut animator = Self::idle();

        let blink_state = Arc::clone(&state);
        animator.handles.push(spawn_periodic(
            "faces-blink",
            period,
            Arc::clone(&active),
            Arc::clone(&animator.stop),
            move || {
                let t = cycle_position(SystemTime::now(), &blink);
                blink_state.set_eye_openness(blink_openness(t, &blink));
            },
        )?);

        animator.handles.push(spawn_periodic(
            "faces-mouth",
            period,
            active,
            Arc::clone(&animator.stop),
            move || state.set_mouth_openness(mouth.proportion()),
        )?);

        tracing::info!(period_ms = period.as_millis() as u64, "animation drivers started");

        Ok(animator)
    }

    fn idle() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
            handles: Vec::with_capacity(2),
        }
    }

    /// Stop both drivers and wait for them to exit.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                tracing::error!("animation driver panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_periodic(
    name: &str,
    period: Duration,
    active: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    mut tick: impl FnMut() + Send + 'static,
) -> Result<JoinHandle<()>> {
    let handle = thread::Builder::new().name(name.to_string()).spawn(move || {
        let mut ticker = Ticker::new(period);
        while !stop.load(Ordering::Acquire) {
            if active.load(Ordering::Acquire) {
                tick();
            }
            ticker.wait();
        }
    })?;

    Ok(handle)
}
