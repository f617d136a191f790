//! Frame clock — the sole time source the integrator uses.
//!
//! Supplies `dt = clamp(now - last, 0, max_dt)` once per render tick,
//! decoupling visual smoothness from rendering jitter and from the
//! slower, independent cadence of target updates.

use std::time::Instant;

/// Per-tick delta-time supplier with a clamped maximum.
#[derive(Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    max_dt: f64,
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self { last: None, max_dt }
    }

    /// Delta since the previous tick, clamped to `[0, max_dt]` seconds.
    /// The first tick after creation (or reset) yields zero.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let dt = match self.last {
            Some(last) if now > last => (now - last).as_secs_f64(),
            _ => 0.0,
        };
        self.last = Some(now);
        self.clamp(dt)
    }

    /// Clamp an externally supplied raw delta (seconds). Non-finite
    /// input integrates as zero rather than poisoning positions.
    pub fn clamp(&self, raw_dt: f64) -> f64 {
        if raw_dt.is_finite() {
            raw_dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        }
    }

    /// Forget the previous tick, so the next delta is zero. Used after
    /// a deliberate discontinuity (scatter, long suspend).
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn set_max_dt(&mut self, max_dt: f64) {
        self.max_dt = max_dt;
    }
}
