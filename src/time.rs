// Clock abstraction and elapsed-time rendering

use chrono::{DateTime, TimeDelta, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Render the time elapsed since `start` as `<seconds>.<millis> s`.
///
/// A start time in the future clamps to zero.
pub fn format_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (now - start).max(TimeDelta::zero());
    let millis = delta.num_milliseconds();
    format!("{}.{:03} s", millis / 1000, millis % 1000)
}
