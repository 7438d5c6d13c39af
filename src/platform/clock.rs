//! Fixed-interval tick pacing
//!
//! Wall-clock time accumulates; every whole interval in the accumulator is one
//! tick. Catch-up after a stall is capped so a slow frame can't snowball.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl Ticker {
    /// Intervals shorter than 1 ms are raised to 1 ms
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed time and return how many ticks are due now
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_substeps {
            self.accumulator -= self.interval;
            due += 1;
        }

        if self.accumulator >= self.interval {
            let interval = self.interval.as_nanos();
            let backlog = self.accumulator.as_nanos();
            log::debug!("Dropping {} ticks of backlog", backlog / interval);
            self.accumulator = Duration::from_nanos((backlog % interval) as u64);
        }

        due
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }
}
