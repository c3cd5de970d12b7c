//! Random number generator abstraction for determinism.
//!
//! In production, this is a session stream of the seed store. In tests,
//! a scripted implementation is injected.

/// Abstraction over a single deterministic stream of bounded draws.
pub trait DeterministicRng {
    /// Generate a uniform integer in `[0, bound)`.
    ///
    /// A non-positive `bound` is a caller defect; implementations panic on it.
    fn below(&mut self, bound: i32) -> i32;
}

impl<R: DeterministicRng + ?Sized> DeterministicRng for &mut R {
    fn below(&mut self, bound: i32) -> i32 {
        (**self).below(bound)
    }
}
