use std::time::{Duration, Instant};

/// Converts wall-clock time into fixed-rate simulation steps. The host calls
/// `due` on every frame; it answers true at most once per `interval`, so the
/// gameplay speed is a pure function of the interval, independent of the
/// host frame rate. Missed intervals are never backfilled: a stalled host
/// delays the simulation rather than fast-forwarding it.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    last_tick: Instant,
    interval: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            last_tick: now,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// True iff a full interval elapsed since the last step; consumes the
    /// elapsed time by resetting the reference point to `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}
