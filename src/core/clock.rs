//! Level countdown clock.
//!
//! A `Countdown` is a passive millisecond accumulator: the host loop feeds it
//! elapsed time through [`Countdown::advance`] and it converts that into
//! whole-second ticks while running. There are no OS timers; stopping and
//! restarting never loses remaining time, and a countdown built with a zero
//! limit can never start (untimed levels).

use crate::types::CLOCK_TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    limit_secs: u32,
    remaining_secs: u32,
    running: bool,
    acc_ms: u32,
}

impl Countdown {
    /// Create a stopped countdown with the full limit remaining.
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit_secs,
            remaining_secs: limit_secs,
            running: false,
            acc_ms: 0,
        }
    }

    /// Start ticking. No-op when already running, expired, or untimed.
    pub fn start(&mut self) {
        if self.remaining_secs > 0 {
            self.running = true;
        }
    }

    /// Stop ticking, keeping the remaining time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn limit_secs(&self) -> u32 {
        self.limit_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether a timed countdown has reached zero.
    pub fn expired(&self) -> bool {
        self.limit_secs > 0 && self.remaining_secs == 0
    }

    /// Seconds consumed so far (0 for untimed countdowns).
    pub fn used_secs(&self) -> u32 {
        self.limit_secs.saturating_sub(self.remaining_secs)
    }

    /// Feed elapsed wall time; returns the number of whole seconds that
    /// ticked off. Stops itself on expiry.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.acc_ms += elapsed_ms;
        let mut ticks = self.acc_ms / CLOCK_TICK_MS;
        self.acc_ms %= CLOCK_TICK_MS;

        if ticks > self.remaining_secs {
            ticks = self.remaining_secs;
        }
        self.remaining_secs -= ticks;

        if self.remaining_secs == 0 {
            self.running = false;
        }
        ticks
    }
}
