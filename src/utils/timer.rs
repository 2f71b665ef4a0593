//! Timer values driven by the UI clock (`ctx.input(|i| i.time)`).
//!
//! Timers are plain data held in state and polled each frame, so they can be
//! dropped to cancel and tested with arbitrary clock values.

/// A single point in time after which something should happen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deadline {
    at: f64,
}

impl Deadline {
    pub fn after(now: f64, delay: f64) -> Self {
        Self { at: now + delay }
    }

    pub fn expired(&self, now: f64) -> bool {
        now >= self.at
    }
}

/// A repeating tick with a fixed period.
///
/// `fired` reports one tick at a time; a frame that arrives late drains the
/// missed ticks on successive calls.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: f64,
    next: f64,
}

impl Ticker {
    pub fn new(now: f64, period: f64) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    pub fn fired(&mut self, now: f64) -> bool {
        if now >= self.next {
            self.next += self.period;
            true
        } else {
            false
        }
    }
}
