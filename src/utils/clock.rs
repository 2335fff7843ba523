// Injectable time source
// The hour window falls back to "now" when no items are supplied; reading the
// system clock through a trait keeps that path deterministic in tests.

use chrono::{DateTime, Local};

#[cfg(test)]
use mockall::automock;

/// Source of the current wall-clock time.
#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a fixed instant, for tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
