//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use runeseed_core::rng::DeterministicRng;

/// A no-op RNG that always returns `0`. Suitable for tests that do not
/// depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn below(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "MockRng::below called with bound {bound}");
        0
    }
}

/// An RNG that returns values from a predetermined sequence and records the
/// bound of every call. Panics if the sequence is exhausted or a scripted
/// value does not fit the requested bound. Used in tests that need specific,
/// repeatable outcomes (e.g., the branches of the luck adjustment).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<i32>,
    index: usize,
    bounds: Vec<i32>,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            index: 0,
            bounds: Vec::new(),
        }
    }

    /// Bounds requested so far, in call order.
    #[must_use]
    pub fn bounds(&self) -> &[i32] {
        &self.bounds
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn below(&mut self, bound: i32) -> i32 {
        let val = self.values[self.index];
        assert!(
            (0..bound).contains(&val),
            "scripted value {val} at index {} is outside [0, {bound})",
            self.index
        );
        self.index += 1;
        self.bounds.push(bound);
        val
    }
}
