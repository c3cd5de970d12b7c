//! World-birth entropy collection.
//!
//! Two independent collectors are XORed together: the platform CSPRNG and
//! the wall clock. The clock contribution keeps the seed from being all
//! zero when the CSPRNG is missing; such a seed is not cryptographically
//! strong and is reported as degraded.

use rand::TryRngCore;
use rand::rngs::OsRng;
use runeseed_core::clock::Clock;
use runeseed_core::entropy::EntropySource;
use runeseed_core::error::EntropyError;
use tracing::warn;

use crate::seed::{SEED_SLICE_LEN, SeedSlice};

/// The platform's cryptographic random facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Outcome of entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entropy {
    /// The collected master seed.
    pub seed: SeedSlice,
    /// `true` if the primary source failed and only the clock contributed.
    pub degraded: bool,
}

/// Collects a master seed from `source` and `clock`.
///
/// Reads `source` exactly once. A failed read is logged and leaves the
/// primary contribution zero; the clock contribution is always applied.
pub fn collect_entropy(source: &mut dyn EntropySource, clock: &dyn Clock) -> Entropy {
    let mut buf = [0u8; SEED_SLICE_LEN];
    let degraded = match source.fill(&mut buf) {
        Ok(()) => false,
        Err(e) => {
            warn!(error = %e, "primary entropy source failed, falling back to the clock");
            buf = [0u8; SEED_SLICE_LEN];
            true
        }
    };

    for (byte, stamp) in buf.iter_mut().zip(clock_stamp(clock)) {
        *byte ^= stamp;
    }

    Entropy {
        seed: SeedSlice::from_bytes(buf),
        degraded,
    }
}

/// The low 32 bits of the Unix seconds followed by the sub-second
/// nanoseconds, both little-endian.
fn clock_stamp(clock: &dyn Clock) -> [u8; 8] {
    let now = clock.now();
    let mut stamp = [0u8; 8];
    stamp[..4].copy_from_slice(&now.timestamp().to_le_bytes()[..4]);
    stamp[4..].copy_from_slice(&now.timestamp_subsec_nanos().to_le_bytes());
    stamp
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use runeseed_test_support::{FailingEntropy, FixedClock, FixedEntropy};

    fn fixed_clock() -> FixedClock {
        // 0x6989_4a40 seconds, 0x0102_0304 nanoseconds
        FixedClock(Utc.timestamp_opt(0x6989_4a40, 0x0102_0304).unwrap())
    }

    #[test]
    fn test_primary_and_clock_are_xored() {
        let mut source = FixedEntropy::new(vec![0xff]);
        let entropy = collect_entropy(&mut source, &fixed_clock());

        assert!(!entropy.degraded);
        assert_eq!(source.reads(), 1);
        assert_eq!(
            entropy.seed,
            SeedSlice::from_bytes([
                0xff ^ 0x40,
                0xff ^ 0x4a,
                0xff ^ 0x89,
                0xff ^ 0x69,
                0xff ^ 0x04,
                0xff ^ 0x03,
                0xff ^ 0x02,
                0xff ^ 0x01,
                0xff,
                0xff,
                0xff,
                0xff,
            ])
        );
    }

    #[test]
    fn test_failed_primary_falls_back_to_clock_only() {
        let entropy = collect_entropy(&mut FailingEntropy, &fixed_clock());

        assert!(entropy.degraded);
        assert_eq!(
            entropy.seed,
            SeedSlice::from_bytes([0x40, 0x4a, 0x89, 0x69, 0x04, 0x03, 0x02, 0x01, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_epoch_clock_contributes_nothing() {
        let mut source = FixedEntropy::new(vec![1, 2, 3]);
        let entropy = collect_entropy(&mut source, &FixedClock::epoch());
        assert_eq!(
            entropy.seed,
            SeedSlice::from_bytes([1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3])
        );
    }

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        OsEntropy.fill(&mut first).unwrap();
        OsEntropy.fill(&mut second).unwrap();
        assert_ne!(first, second);
    }
}
