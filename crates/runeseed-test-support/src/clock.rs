//! Test clock — deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use runeseed_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock fixed at the Unix epoch, which contributes no bits to
    /// collected entropy.
    #[must_use]
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
