// src/clock.rs
use chrono::{DateTime, Local};

/// Time source for the clock-dependent demonstrations. The weekday and
/// noon switches take this instead of reading the global clock so
/// their output can be pinned in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant (`--at`, tests).
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
