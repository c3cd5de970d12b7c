//! Clock abstraction for determinism.

use chrono::{DateTime, Utc};

/// Abstraction over wall-clock time.
///
/// The engine reads it once, at world birth, as a fallback entropy source.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
